use crate::call::{CallSettings, DEFAULT_GOODBYE_PHRASES};
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub call: CallConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Call controller behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    pub goodbye_delay_ms: u64,
    pub goodbye_phrases: Vec<String>,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            goodbye_delay_ms: 1000,
            goodbye_phrases: DEFAULT_GOODBYE_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl CallConfig {
    pub fn settings(&self) -> CallSettings {
        CallSettings {
            goodbye_delay: Duration::from_millis(self.goodbye_delay_ms),
            goodbye_phrases: self.goodbye_phrases.clone(),
        }
    }
}

/// Where the controller requests session descriptors
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub start_call_path: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            start_call_path: "/start_call".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Voice provider REST API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_url: String,
    /// Unset means `/start_call` answers 401
    pub api_key: Option<String>,
    pub voice: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.ultravox.ai/api".to_string(),
            api_key: None,
            voice: "Cassidy-English".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Assistant persona used in the system prompt
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    pub organization: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Cynthia".to_string(),
            organization: "MedFlowX".to_string(),
        }
    }
}

impl Config {
    /// Load from a config file (any format the `config` crate knows) with
    /// `CYNTHIA__SECTION__KEY` environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("CYNTHIA").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
