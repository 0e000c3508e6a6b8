//! Async lookup client
//!
//! Posts query text to the lookup server with reqwest. Transport failures are
//! folded into [`ResponseStatus::NoResponse`] so the UI always gets a status
//! to branch on.

use reqwest::Client;
use thiserror::Error;

use super::lookup_types::{LookupRequest, LookupResponse, ResponseStatus};
use crate::error::TipError;

/// Failure to complete an exchange with the lookup server
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// HTTP client bound to one lookup server
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    /// Create a client for `server_url` (scheme, host and optional path prefix)
    pub fn new(server_url: &str) -> Result<Self, TipError> {
        let parsed = reqwest::Url::parse(server_url).map_err(|e| TipError::InvalidServerUrl {
            url: server_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for a request path
    pub fn url_for(&self, request: &LookupRequest) -> String {
        format!("{}{}", self.base_url, request.path)
    }

    /// Send the request and return the raw status and body
    pub async fn post(&self, request: &LookupRequest) -> Result<(u16, String), LookupError> {
        let response = self
            .client
            .post(self.url_for(request))
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Body(e.to_string()))?;

        Ok((code, body))
    }

    /// Run the exchange to completion, never failing
    pub async fn execute(&self, request: LookupRequest) -> LookupResponse {
        #[cfg(debug_assertions)]
        log::debug!(
            "{} lookup for uid={} -> {}",
            request.kind.name(),
            request.uid,
            self.url_for(&request)
        );

        match self.post(&request).await {
            Ok((code, body)) => {
                #[cfg(debug_assertions)]
                log::debug!("{} lookup for uid={} finished with {}", request.kind.name(), request.uid, code);

                LookupResponse {
                    kind: request.kind,
                    uid: request.uid,
                    status: ResponseStatus::Code(code),
                    body,
                }
            }
            Err(e) => {
                log::warn!(
                    "{} lookup for uid={} got no response: {}",
                    request.kind.name(),
                    request.uid,
                    e
                );
                LookupResponse::no_response(&request)
            }
        }
    }
}
