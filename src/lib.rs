pub mod call;
pub mod config;
pub mod http;
pub mod provider;

pub use call::{
    CallBackend, CallController, CallError, CallErrorKind, CallPhase, CallSettings, CallSnapshot,
    CallStatus, GoodbyeDetector, HttpCallBackend, ListeningIndicator, RealtimeSession,
    RealtimeSessionFactory, SessionDescriptor, SessionEvent, Speaker, ToggleOutcome,
    TranscriptEntry,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use provider::{build_system_prompt, CallContext, UltravoxClient};
