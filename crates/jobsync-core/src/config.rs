use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "jobsync/0.1 (job-listings)";
pub const DEFAULT_AWS_CLI: &str = "aws";
pub const DEFAULT_OUTPUT_FILE: &str = "jobs.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// On-disk shape of `config.toml`. Every key is optional at this layer;
/// required keys are enforced in [`build_app_config`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api: ApiSection,
    aws: AwsSection,
    output: OutputSection,
    log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AwsSection {
    bucket: Option<String>,
    folder: Option<String>,
    cli_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    file_name: Option<String>,
}

/// Load configuration from a TOML file, applying environment overrides.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, a required key
/// is missing, or a value fails validation.
pub fn load_app_config(path: &Path) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env(path)
}

/// Load configuration from a TOML file using env vars already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, a required key
/// is missing, or a value fails validation.
pub fn load_app_config_from_env(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&content)?;
    build_app_config(file, |key| std::env::var(key))
}

/// Parse configuration from TOML text with no environment overrides.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid TOML, a required key is
/// missing, or a value fails validation.
pub fn parse_app_config(content: &str) -> Result<AppConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content)?;
    build_app_config(file, |_| Err(std::env::VarError::NotPresent))
}

/// Merge the parsed file with env-var overrides and validate the result.
///
/// The lookup is injected so tests can use a plain `HashMap` instead of
/// mutating the process environment.
fn build_app_config<F>(file: ConfigFile, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let overridden = |var: &str, from_file: Option<String>| -> Option<String> {
        lookup(var).ok().or(from_file)
    };

    let api_url = overridden("JOBSYNC_API_URL", file.api.url)
        .ok_or_else(|| ConfigError::MissingKey("api.url".to_string()))?;
    validate_url(&api_url)?;

    let aws_bucket = overridden("JOBSYNC_AWS_BUCKET", file.aws.bucket)
        .ok_or_else(|| ConfigError::MissingKey("aws.bucket".to_string()))?;
    if aws_bucket.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "aws.bucket".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let aws_folder = overridden("JOBSYNC_AWS_FOLDER", file.aws.folder).unwrap_or_default();
    let log_level = overridden("JOBSYNC_LOG_LEVEL", file.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let api_timeout_secs = file.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if api_timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: "api.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let output_file_name = file
        .output
        .file_name
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());
    if output_file_name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "output.file_name".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    Ok(AppConfig {
        api_url,
        api_timeout_secs,
        api_user_agent: file
            .api
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        aws_bucket,
        aws_folder,
        aws_cli_path: file
            .aws
            .cli_path
            .unwrap_or_else(|| DEFAULT_AWS_CLI.to_string()),
        output_file_name,
        log_level,
    })
}

fn validate_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: "api.url".to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(format!("\"{raw}\" is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "\"{raw}\" has scheme \"{}\"; expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(format!("\"{raw}\" has no host")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
