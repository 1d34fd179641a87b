use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublicationsError {
    #[error("ORCID_ID env var missing or empty")]
    MissingOrcid,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Private works or an unknown identifier usually show up here as 401/403/404.
    #[error("registry returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PublicationsError>;
