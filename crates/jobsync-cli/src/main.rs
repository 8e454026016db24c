mod pipeline;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::pipeline::{run_pipeline, PipelineOptions};

#[derive(Debug, Parser)]
#[command(name = "jobsync")]
#[command(about = "Fetch job listings, flatten them to CSV, and upload the file to S3")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "JOBSYNC_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Local CSV path (defaults to `output.file_name` from the config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the CSV but do not upload it
    #[arg(long)]
    skip_upload: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = jobsync_core::load_app_config(&cli.config).with_context(|| {
        format!(
            "loading configuration from {} failed",
            cli.config.display()
        )
    })?;

    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let options = PipelineOptions {
        output_path: cli
            .output
            .unwrap_or_else(|| config.default_output_path()),
        skip_upload: cli.skip_upload,
    };

    let summary = run_pipeline(&config, &options)
        .await
        .inspect_err(|e| tracing::error!(error = %format!("{e:#}"), "pipeline failed"))?;

    tracing::info!(
        rows = summary.rows,
        output = %summary.output_path.display(),
        destination = %summary.destination,
        uploaded = summary.uploaded,
        "pipeline finished"
    );

    Ok(())
}

/// Logs go to stderr so stdout carries only the stage-completion messages.
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests;
