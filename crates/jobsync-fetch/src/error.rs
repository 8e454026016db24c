use thiserror::Error;

/// Failure retrieving the raw listing collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status code of the failed response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
            FetchError::Deserialize { .. } => None,
        }
    }
}

/// A raw listing cannot be flattened into a row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataShapeError {
    #[error("listing is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("listing is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("listing field `{field}` has unexpected type: expected {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Table construction was abandoned because one listing failed extraction.
#[derive(Debug, Error)]
#[error("failed to build table at listing {index}: {source}")]
pub struct TableBuildError {
    /// Zero-based position of the offending listing in the input collection.
    pub index: usize,
    #[source]
    pub source: DataShapeError,
}
