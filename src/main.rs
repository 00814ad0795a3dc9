use std::process::ExitCode;

use tracing::error;

mod cli;
mod config;
mod error;
mod player;
mod playlist;
mod reminder;
mod render;
mod runtime;
mod tanda;

fn main() -> ExitCode {
    // Frames go to stdout; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tangotandas=info")),
        )
        .init();

    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("tangotandas: {e}");
            ExitCode::FAILURE
        }
    }
}
