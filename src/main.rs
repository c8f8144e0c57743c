use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod api_client;
mod client;
mod cmd;
mod config;
mod error;
mod fetch;
mod refresh;
mod table;
mod types;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // diagnostics go to stderr so stdout only ever carries JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = cmd::Cli::parse();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(message) = cmd::exit_message(&err) {
                error!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}
