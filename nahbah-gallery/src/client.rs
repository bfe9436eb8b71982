//! Design library backend client
//!
//! Read-only access to the backend catalog plus booklet generation:
//! - `GET /materials/` - material catalog
//! - `GET /designs/` - every design submission, any status
//! - `GET /designs/download_booklet/?design_ids=5,12,7` - compiled PDF
//!
//! Every request is bounded by the client timeout; a timeout surfaces as
//! [`ClientError::Timeout`] and follows the same failure path as any other
//! network error.

use std::time::Duration;

use nahbah_common::{Design, Material};
use serde::de::DeserializeOwned;
use thiserror::Error;

const USER_AGENT: &str = concat!("nahbah-gallery/", env!("CARGO_PKG_VERSION"));

/// Backend client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Backend returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(e.to_string())
        } else if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

/// Comma-joined `design_ids` value, in the order given
pub fn design_ids_param(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// HTTP client for the design library backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` (no trailing slash, e.g. `http://localhost:8000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the material catalog, in backend order
    pub async fn list_materials(&self) -> Result<Vec<Material>, ClientError> {
        let materials: Vec<Material> = self.get_json("/materials/").await?;
        tracing::debug!(count = materials.len(), "Fetched materials");
        Ok(materials)
    }

    /// Fetch every design submission, unfiltered
    ///
    /// Pending and rejected designs are included; callers restrict to approved.
    pub async fn list_designs(&self) -> Result<Vec<Design>, ClientError> {
        let designs: Vec<Design> = self.get_json("/designs/").await?;
        tracing::debug!(count = designs.len(), "Fetched designs");
        Ok(designs)
    }

    /// Request the compiled booklet PDF for `ids`
    ///
    /// Issues exactly one request. Callers guard against an empty `ids`.
    pub async fn download_booklet(&self, ids: &[i64]) -> Result<Vec<u8>, ClientError> {
        // Integers and commas need no escaping; the backend expects a literal comma list
        let url = format!(
            "{}/designs/download_booklet/?design_ids={}",
            self.base_url,
            design_ids_param(ids)
        );

        tracing::debug!(url = %url, count = ids.len(), "Requesting booklet");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ClientError::Parse("Booklet response body is empty".to_string()));
        }

        tracing::info!(bytes = body.len(), designs = ids.len(), "Booklet received");

        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(url = %url, "Querying backend");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
