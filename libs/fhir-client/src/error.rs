//! Error types for fhir-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// FHIR client errors
#[derive(Error, Debug)]
pub enum Error {
    /// Connection refused, DNS failure, timeout exceeded.
    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status at or above 400.
    #[error("FHIR server returned status {status}: {body}")]
    HttpStatus {
        status: u16,
        body: serde_json::Value,
    },

    /// A success status whose body is not JSON.
    #[error("FHIR server returned status {status} with a non-JSON body: {source}")]
    MalformedBody {
        status: u16,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid FHIR base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::MalformedBody { status, .. } => {
                Some(*status)
            }
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
