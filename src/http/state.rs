use crate::config::{AssistantConfig, Config};
use crate::provider::{CallContext, UltravoxClient};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Voice provider REST client
    pub provider: Arc<UltravoxClient>,

    /// Voice requested for new calls
    pub voice: String,

    /// Assistant persona for the system prompt
    pub assistant: AssistantConfig,

    /// Records-store figures injected into the system prompt
    pub context: Arc<RwLock<CallContext>>,
}

impl AppState {
    pub fn new(provider: UltravoxClient, voice: String, assistant: AssistantConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            voice,
            assistant,
            context: Arc::new(RwLock::new(CallContext::default())),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = UltravoxClient::new(&config.provider)?;

        Ok(Self::new(
            provider,
            config.provider.voice.clone(),
            config.assistant.clone(),
        ))
    }

    /// Replace the context used for subsequent calls
    pub async fn set_context(&self, context: CallContext) {
        *self.context.write().await = context;
    }
}
