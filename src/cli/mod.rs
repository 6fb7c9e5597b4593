mod handlers;
pub mod parse;

pub use parse::Cli;

use crate::core::error::PlotError;

/// Route a parsed invocation to its handler.
pub fn dispatch(cli: Cli) -> Result<(), PlotError> {
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
