//! Argument surface: clap definitions plus shell-style string splitting.

use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(name = "harry", about = "High-resolution terminal plotting using braille")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plot data from a CSV file
    Csv(CsvArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `harry csv ...`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Graph title
    #[arg(short, long, default_value = "CSV Data")]
    pub title: String,

    /// Optional subtitle
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Y-axis lower bound (auto if omitted)
    #[arg(long)]
    pub y_min: Option<f64>,
    /// Y-axis upper bound (auto if omitted)
    #[arg(long)]
    pub y_max: Option<f64>,

    /// X-axis lower bound
    #[arg(long)]
    pub x_min: Option<f64>,
    /// X-axis upper bound
    #[arg(long)]
    pub x_max: Option<f64>,

    /// Color (name or `#RRGGBB`)
    #[arg(long, default_value = "amber")]
    pub color: String,

    /// Sort by x before plotting
    #[arg(long)]
    pub sort: bool,
}

/// Split one argument string the way a shell would: whitespace separates
/// tokens, single or double quotes group them. No escape processing.
#[must_use]
pub fn split_args(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted_token = false;

    for c in raw.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    quoted_token = true;
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted_token {
                        tokens.push(std::mem::take(&mut current));
                    }
                    quoted_token = false;
                }
                _ => current.push(c),
            },
        }
    }
    if !current.is_empty() || quoted_token {
        tokens.push(current);
    }
    tokens
}

/// Parse a whole argument string as if it had been typed after `harry`.
pub fn from_arg_string(raw: &str) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("harry".to_owned()).chain(split_args(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_args("csv data.csv --sort"), ["csv", "data.csv", "--sort"]);
    }

    #[test]
    fn quotes_group_tokens() {
        assert_eq!(
            split_args("csv --title 'My Plot' --color \"#6048c1\""),
            ["csv", "--title", "My Plot", "--color", "#6048c1"]
        );
    }

    #[test]
    fn empty_quoted_token_survives() {
        assert_eq!(split_args("csv --title ''"), ["csv", "--title", ""]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn arg_string_parses_like_argv() {
        let cli = from_arg_string("csv points.csv --y-min 0 --y-max 5").unwrap();
        match cli.cmd {
            Command::Csv(a) => {
                assert_eq!(a.file, "points.csv");
                assert_eq!(a.y_min, Some(0.0));
                assert_eq!(a.y_max, Some(5.0));
            }
            other => panic!("expected csv, got {other:?}"),
        }
    }

    #[test]
    fn unknown_subcommand_is_an_error() {
        assert!(from_arg_string("scatter data.csv").is_err());
    }
}
