mod output;
mod run;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Conventional exit status for a run aborted by SIGINT.
const INTERRUPTED_EXIT_CODE: u8 = 130;

#[derive(Debug, Parser)]
#[command(name = "circular-cli")]
#[command(about = "Extract weekly circular deals into ingestion-ready JSON")]
pub(crate) struct Cli {
    /// Store id substituted into the circular URL (defaults to CIRCULAR_STORE_ID)
    pub(crate) store_id: Option<String>,

    /// Use the built-in three-item sample page instead of fetching
    #[arg(long, conflicts_with = "input")]
    pub(crate) test: bool,

    /// Read circular markup from a local file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long)]
    pub(crate) quiet: bool,

    /// Where to write the deals JSON
    #[arg(long, value_name = "FILE", default_value = "deals.json")]
    pub(crate) output: PathBuf,

    /// Do not dump the page markup to CIRCULAR_DEBUG_HTML_PATH
    #[arg(long)]
    pub(crate) no_debug_html: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = circular_core::load_app_config()?;

    let default_level = if cli.quiet { "warn" } else { config.log_level.as_str() };
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tokio::select! {
        result = run::run(&cli, &config) => result,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            tracing::warn!("interrupted; no output written");
            Ok(ExitCode::from(INTERRUPTED_EXIT_CODE))
        }
    }
}
