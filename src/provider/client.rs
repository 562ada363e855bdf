use super::messages::{CreateCallRequest, ProviderResponse};
use crate::config::ProviderConfig;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

pub struct UltravoxClient {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl UltravoxClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build provider HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Create a call with the provider
    pub async fn create_call(&self, request: &CreateCallRequest) -> Result<ProviderResponse> {
        let url = format!("{}/calls", self.api_url);

        info!("Creating provider call (voice={})", request.voice);

        let resp = self
            .http
            .post(&url)
            .header("X-API-Key", self.api_key.as_deref().unwrap_or_default())
            .json(request)
            .send()
            .await
            .context("Failed to reach voice provider")?;

        Self::read(resp).await
    }

    /// Fetch the provider's voice catalogue
    pub async fn list_voices(&self) -> Result<ProviderResponse> {
        let url = format!("{}/voices", self.api_url);

        let resp = self
            .http
            .get(&url)
            .header("X-API-Key", self.api_key.as_deref().unwrap_or_default())
            .send()
            .await
            .context("Failed to reach voice provider")?;

        Self::read(resp).await
    }

    async fn read(resp: reqwest::Response) -> Result<ProviderResponse> {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .context("Failed to read provider response")?;

        Ok(ProviderResponse { status, body })
    }
}
