//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("y_min {low} must be < y_max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Faults while ingesting CSV rows.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error on line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected 1\u{2013}2 columns, got {got}")]
    ColumnCount { line: usize, got: usize },
    #[error("line {line}: invalid {field} value '{text}'")]
    BadFloat {
        line: usize,
        field: &'static str,
        text: String,
    },
    #[error("data set is empty")]
    Empty,
}

/// Faults while resolving a color argument.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("unknown color `{name}` (known: {known})")]
    UnknownName { name: String, known: &'static str },
    #[error("malformed hex color `{0}` (expected #RRGGBB)")]
    BadHex(String),
}

/// Top-level error type bubbled up by public APIs.
///
/// The `harry` entry function returns this unchanged; it never catches or
/// wraps what the core produced.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("graph too small: need \u{2265}{want_w}\u{d7}{want_h}, got {got_w}\u{d7}{got_h}")]
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}
