//! Fetch → build → save → upload, one stage after another.
//!
//! Any stage failure aborts the run. The CSV may already exist on disk when
//! the upload stage fails; nothing is cleaned up.

use std::path::PathBuf;

use anyhow::Context;
use jobsync_core::AppConfig;
use jobsync_export::{s3_destination, write_table, S3Uploader};
use jobsync_fetch::{build_table, JobsClient};

pub(crate) struct PipelineOptions {
    pub output_path: PathBuf,
    /// Stop after the CSV is written.
    pub skip_upload: bool,
}

#[derive(Debug)]
pub(crate) struct PipelineSummary {
    pub rows: usize,
    pub output_path: PathBuf,
    pub destination: String,
    pub uploaded: bool,
}

/// Runs one full pipeline pass against `config`.
///
/// # Errors
///
/// Returns the first stage failure, wrapped with the name of the stage. The
/// typed cause ([`jobsync_fetch::FetchError`], [`jobsync_fetch::TableBuildError`],
/// [`jobsync_export::SerializationError`], [`jobsync_export::UploadError`]) is
/// reachable through `downcast_ref`.
pub(crate) async fn run_pipeline(
    config: &AppConfig,
    options: &PipelineOptions,
) -> anyhow::Result<PipelineSummary> {
    let client = JobsClient::new(config.api_timeout_secs, &config.api_user_agent)
        .context("failed to build HTTP client")?;

    println!("Reading the API....");
    let response = client
        .fetch_jobs(&config.api_url)
        .await
        .inspect_err(|e| {
            tracing::error!(stage = "fetch", status = ?e.status(), error = %e, "reading the API failed");
        })
        .context("reading the API failed")?;
    println!("API Done Reading!");

    println!("Building table..");
    let table = build_table(&response.results)
        .inspect_err(|e| tracing::error!(stage = "build", error = %e, "building the table failed"))
        .context("building the table failed")?;

    let output_path = &options.output_path;
    write_table(&table, output_path)
        .inspect_err(|e| tracing::error!(stage = "save", error = %e, "saving the table failed"))
        .with_context(|| format!("saving the table to {} failed", output_path.display()))?;
    println!(
        "Table saved to local file called {}",
        output_path.display()
    );

    let file_name = output_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(config.output_file_name.as_str());
    let destination = s3_destination(&config.aws_bucket, &config.aws_folder, file_name);

    let summary = PipelineSummary {
        rows: table.len(),
        output_path: output_path.clone(),
        destination,
        uploaded: false,
    };

    if options.skip_upload {
        println!("Skipping upload (would copy to {})", summary.destination);
        return Ok(summary);
    }

    println!("Uploading to AWS S3....");
    S3Uploader::new(&config.aws_cli_path)
        .upload(output_path, &summary.destination)
        .await
        .inspect_err(|e| tracing::error!(stage = "upload", error = %e, "uploading the file failed"))
        .context("uploading the file failed")?;
    println!("File Uploading Done!");

    Ok(PipelineSummary {
        uploaded: true,
        ..summary
    })
}
