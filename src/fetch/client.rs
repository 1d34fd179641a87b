use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use urlencoding::encode;

use crate::error::{PublicationsError, Result};

pub const DEFAULT_BASE_URL: &str = "https://pub.orcid.org";
pub const USER_AGENT: &str = concat!("orcid-publications/", env!("CARGO_PKG_VERSION"));

pub struct OrcidClient {
    client: Client,
    base_url: String,
}

impl OrcidClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| transport_error(&base_url, e))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn works_url(&self, orcid: &str) -> String {
        format!("{}/v3.0/{}/works", self.base_url, encode(orcid))
    }

    /// Single GET of the works endpoint. Any non-2xx status is an error; nothing is retried.
    pub async fn fetch_works(&self, orcid: &str) -> Result<Value> {
        let url = self.works_url(orcid);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublicationsError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> PublicationsError {
    PublicationsError::Transport {
        url: url.to_string(),
        source,
    }
}
