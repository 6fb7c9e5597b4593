//! CSV ingest: `x,y` rows with lenient framing.
//!
//! Accepted per line: `x,y` or a lone `y` (the row index becomes `x`).
//! Blank lines and `#` comments are skipped, as is a single leading header
//! row whose first field does not parse as a float.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use crate::core::error::DataError;

/// One data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

const BUF_CAP: usize = 1 << 16;

fn parse_field(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, DataError> {
    let bad = || DataError::BadFloat {
        line,
        field,
        text: String::from_utf8_lossy(bytes).into_owned(),
    };
    let v = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if v.is_finite() { Ok(v) } else { Err(bad()) }
}

/// Read samples from any byte source. Fails on malformed rows and on an
/// entirely empty data set.
#[allow(clippy::cast_precision_loss)]
pub fn read_csv<R: Read>(src: R) -> Result<Vec<Sample>, DataError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut line = Vec::<u8>::with_capacity(128);
    let mut samples = Vec::new();
    let mut line_no = 0usize;
    let mut header_window = true;

    loop {
        line.clear();
        let n = rdr
            .read_until(b'\n', &mut line)
            .map_err(|e| DataError::Io {
                line: line_no,
                source: e,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let row = line.trim_ascii();
        if row.is_empty() || row[0] == b'#' {
            continue;
        }

        let mut fields = row.split(|&b| b == b',').map(<[u8]>::trim_ascii);
        let first = fields.next().unwrap_or(&[]);

        // The first data-looking row may be a textual header instead.
        if header_window {
            header_window = false;
            if lexical_core::parse::<f64>(first).is_err() {
                continue;
            }
        }

        let second = fields.next();
        let extra = fields.count();
        if extra > 0 {
            return Err(DataError::ColumnCount {
                line: line_no,
                got: 2 + extra,
            });
        }

        let sample = match second {
            Some(col) if !col.is_empty() => Sample {
                x: parse_field(first, line_no, "x")?,
                y: parse_field(col, line_no, "y")?,
            },
            _ => Sample {
                x: samples.len() as f64,
                y: parse_field(first, line_no, "y")?,
            },
        };
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(samples)
}

/// Read samples from a path, with `-` meaning stdin.
pub fn read_csv_path(path: &str) -> Result<Vec<Sample>, DataError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        let file = File::open(path).map_err(|e| DataError::Io { line: 0, source: e })?;
        read_csv(file)
    }
}
