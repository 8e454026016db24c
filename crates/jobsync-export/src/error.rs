use thiserror::Error;

/// Failure writing the local CSV file.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("cannot determine parent directory for {path}")]
    NoParentDir { path: String },

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Failure invoking or completing the external upload command.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        /// Exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        status: String,
        stderr: String,
    },
}
