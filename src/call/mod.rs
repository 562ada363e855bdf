//! Voice call lifecycle management
//!
//! This module provides the `CallController` that manages:
//! - The call-in-progress gate behind the avatar control
//! - The backend handshake for a session descriptor
//! - Joining and leaving the real-time voice session
//! - Status and transcript event handling
//! - Automatic termination after a verbal goodbye

mod backend;
mod controller;
mod error;
mod goodbye;
mod handshake;
mod settings;
mod types;

pub use backend::{
    CallBackend, ListeningIndicator, RealtimeSession, RealtimeSessionFactory, TracingIndicator,
    UnavailableSessionFactory,
};
pub use controller::CallController;
pub use error::{CallError, CallErrorKind};
pub use goodbye::GoodbyeDetector;
pub use handshake::HttpCallBackend;
pub use settings::{CallSettings, DEFAULT_GOODBYE_PHRASES};
pub use types::{
    CallPhase, CallSnapshot, CallStatus, SessionDescriptor, SessionEvent, Speaker, ToggleOutcome,
    TranscriptEntry,
};
