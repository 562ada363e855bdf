use serde::{Deserialize, Serialize};

/// Call creation request sent to the voice provider
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallRequest {
    pub system_prompt: String,
    pub voice: String,
    pub selected_tools: Vec<serde_json::Value>,
}

/// Raw provider reply, forwarded or mapped to an error by the HTTP layer
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    /// `detail` field of a JSON error body, else the raw body
    pub fn detail(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|v| v.get("detail").map(|d| match d.as_str() {
                Some(s) => s.to_string(),
                None => d.to_string(),
            }))
            .unwrap_or_else(|| self.body.clone())
    }
}
