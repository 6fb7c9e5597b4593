//! Business-logic layer: the core object plus its supporting types.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod harry;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, colorize, resolve_color};
pub use config::{Config, ConfigBuilder};
pub use constants::{DECIMAL_PRECISION, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH};
pub use data::Sample;
pub use error::{ColorError, ConfigError, DataError, PlotError};
pub use harry::{HarryCore, PlotterCore};
