//! S3 upload via the `aws` CLI.
//!
//! Invokes `aws s3 cp <local> <destination>` as a subprocess. Credentials and
//! region come from the CLI's own configuration.

use std::path::Path;

use crate::error::UploadError;

/// Builds `s3://<bucket>/<folder>/<file_name>`.
///
/// Leading and trailing slashes on each part are dropped, an `s3://` prefix
/// on `bucket` is tolerated, and an empty folder is omitted.
#[must_use]
pub fn s3_destination(bucket: &str, folder: &str, file_name: &str) -> String {
    let bucket = bucket.trim_start_matches("s3://").trim_matches('/');
    let folder = folder.trim_matches('/');
    let file_name = file_name.trim_matches('/');

    if folder.is_empty() {
        format!("s3://{bucket}/{file_name}")
    } else {
        format!("s3://{bucket}/{folder}/{file_name}")
    }
}

/// Runs the upload command for one local file.
pub struct S3Uploader {
    program: String,
}

impl S3Uploader {
    /// `program` is the CLI to invoke, normally `"aws"`.
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }

    /// Copies `local` to `destination`, waiting for the command to exit.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Spawn`] if the program cannot be started.
    /// - [`UploadError::NonZeroExit`] if it exits unsuccessfully; captured
    ///   stderr is included.
    pub async fn upload(&self, local: &Path, destination: &str) -> Result<(), UploadError> {
        tracing::info!(
            program = %self.program,
            local = %local.display(),
            destination,
            "uploading file"
        );

        let output = tokio::process::Command::new(&self.program)
            .arg("s3")
            .arg("cp")
            .arg(local)
            .arg(destination)
            .output()
            .await
            .map_err(|e| {
                tracing::error!(program = %self.program, error = %e, "failed to spawn upload command");
                UploadError::Spawn {
                    program: self.program.clone(),
                    source: e,
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            tracing::error!(
                program = %self.program,
                status = %output.status,
                stderr = %stderr,
                "upload command returned non-zero exit"
            );
            return Err(UploadError::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_joins_bucket_folder_and_file() {
        assert_eq!(
            s3_destination("py-project-jobs-s3bucket", "input", "jobs.csv"),
            "s3://py-project-jobs-s3bucket/input/jobs.csv"
        );
    }

    #[test]
    fn destination_omits_empty_folder() {
        assert_eq!(s3_destination("bucket", "", "jobs.csv"), "s3://bucket/jobs.csv");
        assert_eq!(s3_destination("bucket", "/", "jobs.csv"), "s3://bucket/jobs.csv");
    }

    #[test]
    fn destination_trims_stray_slashes() {
        assert_eq!(
            s3_destination("bucket/", "/input/daily/", "/jobs.csv"),
            "s3://bucket/input/daily/jobs.csv"
        );
    }

    #[test]
    fn destination_tolerates_scheme_on_bucket() {
        assert_eq!(
            s3_destination("s3://bucket", "input", "jobs.csv"),
            "s3://bucket/input/jobs.csv"
        );
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let uploader = S3Uploader::new("/nonexistent/jobsync-aws-cli");
        let err = uploader
            .upload(Path::new("jobs.csv"), "s3://bucket/jobs.csv")
            .await
            .unwrap_err();
        assert!(
            matches!(err, UploadError::Spawn { ref program, .. } if program.contains("jobsync-aws-cli")),
            "expected Spawn error, got: {err:?}"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_is_success() {
        let uploader = S3Uploader::new("true");
        uploader
            .upload(Path::new("jobs.csv"), "s3://bucket/jobs.csv")
            .await
            .expect("`true` should count as a successful upload");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_upload_error() {
        let uploader = S3Uploader::new("false");
        let err = uploader
            .upload(Path::new("jobs.csv"), "s3://bucket/jobs.csv")
            .await
            .unwrap_err();
        assert!(
            matches!(err, UploadError::NonZeroExit { code: Some(1), .. }),
            "expected NonZeroExit(1), got: {err:?}"
        );
    }
}
