use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;
pub mod fetch;
pub mod normalize;
pub mod output;

pub use error::PublicationsError;

pub const DEFAULT_OUTPUT_PATH: &str = "assets/publications.json";

/// Collapses runs of whitespace into a single space and trims both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the trimmed identifier, or `MissingOrcid` when it is absent or blank.
pub fn require_orcid(orcid: Option<&str>) -> Result<String, PublicationsError> {
    match orcid.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(PublicationsError::MissingOrcid),
    }
}

pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("orcid_publications=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub year: Option<i64>,
    #[serde(rename = "type")]
    pub work_type: String,
    pub doi: String,
    pub url: String,
    /// Registry-assigned code, kept verbatim for consumers.
    pub orcid_put_code: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationsDocument {
    pub orcid: String,
    pub generated_utc: String,
    pub count: usize,
    pub publications: Vec<PublicationRecord>,
}
