//! Error types for the seeder

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Network failures and HTTP status errors from the FHIR server.
    #[error(transparent)]
    Client(#[from] uti_demo_fhir_client::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server response for {title} has no resource id")]
    MissingId { title: String },

    #[error("Invalid demo case catalogue {}: {source}", path.display())]
    Catalogue {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// HTTP status returned by the server, if the failure carried one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Client(e) => e.status(),
            _ => None,
        }
    }
}
