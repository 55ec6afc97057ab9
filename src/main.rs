use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let debug = std::env::args().any(|arg| arg == "--debug");
    init_tracing(debug);

    match wnj::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            wnj::ui::output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG`; `--debug` forces debug level.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("wnj=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
