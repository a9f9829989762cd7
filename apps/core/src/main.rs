// RFx Studio entry point
// Analyzes RFx documents and drafts proposal responses from a local library

mod analysis;
mod cli;
mod clipboard;
mod commands;
mod config;
mod database;
mod draft;
mod editor;
mod error;
mod fs_manager;
mod models;
mod text_extract;
mod workspace;

#[cfg(test)]
mod tests;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use clipboard::StdioClipboard;
use config::{AppConfig, LogFormat, LOG_FILTER_VAR};
use fs_manager::DataDirs;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rfx-studio error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = AppConfig::load()?.with_data_dir(cli.data_dir.clone())?;
    init_tracing(cli.quiet, cli.verbose, config.log_format)?;

    let dirs = DataDirs::new(&config.data_dir);
    dirs.init()
        .with_context(|| format!("failed to create data directory {}", dirs.root().display()))?;

    let pool = database::init_db(&dirs.db_path())
        .await
        .context("failed to open the document library")?;
    info!("Using data directory {}", dirs.root().display());

    let ctx = commands::AppContext {
        pool,
        clipboard: Box::new(StdioClipboard),
        json: cli.json,
    };
    let result = commands::dispatch(cli.command, &ctx).await;
    ctx.pool.close().await;
    result
}

fn init_tracing(quiet: bool, verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
