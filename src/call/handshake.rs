use super::backend::CallBackend;
use super::error::CallError;
use super::types::SessionDescriptor;
use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};

/// Call-initiation backend reached over HTTP
pub struct HttpCallBackend {
    http: reqwest::Client,
    url: String,
}

impl HttpCallBackend {
    /// Create a backend client for `{base_url}{path}`
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl CallBackend for HttpCallBackend {
    async fn request_session(&self) -> Result<SessionDescriptor, CallError> {
        info!("Requesting call session from {}", self.url);

        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| CallError::Handshake(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| CallError::Handshake(e.to_string()))?;

        if !status.is_success() {
            return Err(CallError::HandshakeRejected {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        debug!("Handshake response: {}", body);

        serde_json::from_str::<SessionDescriptor>(&body)
            .map_err(|e| CallError::InvalidDescriptor(e.to_string()))
    }
}

/// Pull the `error` field out of a JSON error body, else return the raw text
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
