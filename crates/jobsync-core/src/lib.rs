pub mod app_config;
pub mod config;
pub mod table;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, parse_app_config};
pub use table::{OutputRow, OutputTable, COLUMNS, NOT_AVAILABLE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required config key: {0}")]
    MissingKey(String),

    #[error("invalid value for config key {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
