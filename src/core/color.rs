//! ANSI color resolution: named palette plus `#RRGGBB` truecolor.

use crate::core::error::ColorError;

/// Names accepted by [`resolve_color`], kept in one place for error messages.
pub const KNOWN_NAMES: &str = "black, red, green, yellow, blue, magenta, cyan, white, amber";

/// One SGR escape sequence, ready to prefix a styled span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode {
    seq: String,
}

impl AnsiCode {
    fn sgr(params: &str) -> Self {
        Self {
            seq: format!("\x1b[{params}m"),
        }
    }

    /// 24-bit foreground color.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::sgr(&format!("38;2;{r};{g};{b}"))
    }

    /// Default plot color, a warm amber.
    #[must_use]
    pub fn amber() -> Self {
        Self::rgb(0xff, 0xaf, 0x00)
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.seq
    }
}

/// Wrap `text` in the color's escape sequence plus a reset.
#[must_use]
pub fn colorize(code: &AnsiCode, text: &str) -> String {
    format!("{}{text}\x1b[0m", code.seq)
}

/// Map a user-supplied color argument to an escape code.
///
/// Accepts the names in [`KNOWN_NAMES`] or a `#RRGGBB` hex triplet.
pub fn resolve_color(arg: &str) -> Result<AnsiCode, ColorError> {
    if let Some(hex) = arg.strip_prefix('#') {
        return parse_hex(arg, hex);
    }
    let code = match arg.to_ascii_lowercase().as_str() {
        "black" => AnsiCode::sgr("30"),
        "red" => AnsiCode::sgr("31"),
        "green" => AnsiCode::sgr("32"),
        "yellow" => AnsiCode::sgr("33"),
        "blue" => AnsiCode::sgr("34"),
        "magenta" => AnsiCode::sgr("35"),
        "cyan" => AnsiCode::sgr("36"),
        "white" => AnsiCode::sgr("37"),
        "amber" => AnsiCode::amber(),
        _ => {
            return Err(ColorError::UnknownName {
                name: arg.to_owned(),
                known: KNOWN_NAMES,
            });
        }
    };
    Ok(code)
}

fn parse_hex(arg: &str, hex: &str) -> Result<AnsiCode, ColorError> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::BadHex(arg.to_owned()));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Ok(AnsiCode::rgb(channel(0), channel(2), channel(4)))
}
