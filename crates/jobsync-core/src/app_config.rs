use std::path::PathBuf;

/// Resolved runtime configuration for one pipeline run.
///
/// Built from the TOML config file with environment overrides applied on
/// top; see [`crate::config::load_app_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the raw job-listing collection (`api.url`).
    pub api_url: String,
    pub api_timeout_secs: u64,
    pub api_user_agent: String,
    /// Destination bucket name (`aws.bucket`), without the `s3://` scheme.
    pub aws_bucket: String,
    /// Key prefix inside the bucket (`aws.folder`). May be empty.
    pub aws_folder: String,
    /// Program invoked for the upload step, normally `aws`.
    pub aws_cli_path: String,
    pub output_file_name: String,
    pub log_level: String,
}

impl AppConfig {
    /// Local path the CSV is written to when no `--output` override is given.
    #[must_use]
    pub fn default_output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_file_name)
    }
}
