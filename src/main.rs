//! `harry` binary: logging bootstrap plus delegation to the library entry
//! point. Handler and level configuration stay out of the library.

use harry_plotter::harry;

fn main() {
    env_logger::init();
    // Parse failures on the `None` path already exit inside clap with
    // their own usage formatting; anything surfacing here is a plot error.
    if let Err(e) = harry(None) {
        eprintln!("harry: {e}");
        std::process::exit(1);
    }
}
