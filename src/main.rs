use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use corkboard::cli::Cli;

/// Route logs to a file under the data-local dir. The board owns the
/// terminal while it runs, so nothing may write to stderr. The filter
/// comes from CORKBOARD_LOG (e.g. "debug", "corkboard=trace").
fn init_tracing() {
    let Some(dirs) = directories::ProjectDirs::from("", "", "corkboard") else {
        return;
    };

    let log_dir = dirs.data_local_dir();
    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("corkboard.log"))
    else {
        return;
    };

    let filter =
        EnvFilter::try_from_env("CORKBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
