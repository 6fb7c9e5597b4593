//! The core object behind the `harry` entry function.

use clap::Parser;
use log::debug;

use crate::{
    cli::{self, parse::Cli},
    core::error::PlotError,
};

/// Contract between the entry function and a plotting core: a no-argument
/// constructor (via `Default`) plus one `run` method that owns argument
/// parsing, configuration and error reporting.
///
/// `args_from_script` is either a whole shell-style argument string or
/// `None`, in which case the real process arguments are parsed.
pub trait PlotterCore {
    fn run(&mut self, args_from_script: Option<&str>) -> Result<(), PlotError>;
}

/// Default plotting core: resolves arguments, then drives the CSV-to-braille
/// pipeline.
#[derive(Debug, Default)]
pub struct HarryCore {
    _private: (),
}

impl HarryCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlotterCore for HarryCore {
    fn run(&mut self, args_from_script: Option<&str>) -> Result<(), PlotError> {
        let cli = match args_from_script {
            Some(raw) => {
                debug!("parsing supplied argument string: {raw:?}");
                cli::parse::from_arg_string(raw)?
            }
            None => Cli::parse(),
        };
        cli::dispatch(cli)
    }
}
