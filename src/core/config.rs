//! Run-time plot configuration plus fluent builder.

use crate::core::{color::AnsiCode, error::ConfigError};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_chars: usize,
    pub y_chars: usize,
    pub color: AnsiCode,
    pub x_range: Option<(f64, f64)>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> ConfigBuilder {
        ConfigBuilder::new(x_chars, y_chars)
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    y_min: Option<f64>,
    y_max: Option<f64>,
    x_range: Option<(f64, f64)>,
    color: Option<AnsiCode>,
}

impl ConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }

    /// No-op when the option is `None`; keeps caller chains flat.
    #[must_use]
    pub fn subtitle_opt(mut self, s: Option<&str>) -> Self {
        if let Some(t) = s {
            self.subtitle = Some(t.to_owned());
        }
        self
    }

    #[must_use]
    pub fn y_min(mut self, v: f64) -> Self {
        self.y_min = Some(v);
        self
    }

    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.y_max = Some(v);
        self
    }

    #[must_use]
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }

    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(c);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let y_min = self.y_min.ok_or(ConfigError::MissingField("y_min"))?;
        let y_max = self.y_max.ok_or(ConfigError::MissingField("y_max"))?;
        if y_min >= y_max {
            return Err(ConfigError::InvalidRange {
                low: y_min,
                high: y_max,
            });
        }
        Ok(Config {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            y_min,
            y_max,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            color: self.color.unwrap_or_else(AnsiCode::amber),
            x_range: self.x_range,
        })
    }
}
