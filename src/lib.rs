//! Public-facing crate root: re-exports plus the `harry` entry function.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    color::{AnsiCode, colorize, resolve_color},
    config::{Config, ConfigBuilder},
    data::Sample,
    error::{ColorError, ConfigError, DataError, PlotError},
    harry::{HarryCore, PlotterCore},
};

pub use self::render::{BrailleGrid, Span, envelope, rasterize};

/// Main plotting function.
///
/// Can be called from other programs by passing the arguments as one string,
/// exactly as they would appear after the binary name on a shell command
/// line. `None` means "parse the real process arguments".
///
/// This function is pure delegation: it constructs one fresh [`HarryCore`]
/// and hands the argument string through untouched. Whatever the core
/// returns, including errors, comes back unchanged.
pub fn harry(args_from_script: Option<&str>) -> Result<(), PlotError> {
    run_with_core::<HarryCore>(args_from_script)
}

/// Construct a fresh `C` and delegate to its `run` method.
///
/// The seam `harry` is built on; substitute your own [`PlotterCore`] to
/// intercept the delegation.
pub fn run_with_core<C: PlotterCore + Default>(
    args_from_script: Option<&str>,
) -> Result<(), PlotError> {
    C::default().run(args_from_script)
}
