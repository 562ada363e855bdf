pub mod client;
pub mod messages;
pub mod prompt;

pub use client::UltravoxClient;
pub use messages::{CreateCallRequest, ProviderResponse};
pub use prompt::{build_answer, build_system_prompt, CallContext};
