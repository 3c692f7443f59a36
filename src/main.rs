//! dirpick binary entry point.

use dirpick::core::errors::ResolveError;
use dirpick::ui::output;

fn main() {
    if let Err(err) = dirpick::cli::run() {
        output::error(format!("{err:#}"));
        let code = err
            .downcast_ref::<ResolveError>()
            .map(ResolveError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
