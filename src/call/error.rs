//! Typed call errors.
//!
//! Every failure during call setup reverts the controller to idle and is
//! returned as a `CallError` so callers can log or ignore it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("Handshake rejected (status {status}): {detail}")]
    HandshakeRejected { status: u16, detail: String },

    #[error("Handshake request failed: {0}")]
    Handshake(String),

    #[error("Invalid session descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Real-time session capability is unavailable")]
    CapabilityUnavailable,

    #[error("Failed to join call: {0}")]
    Join(String),

    #[error("Failed to leave call: {0}")]
    Teardown(String),
}

/// Coarse classification of a [`CallError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallErrorKind {
    Handshake,
    Capability,
    Setup,
    Teardown,
}

impl CallError {
    pub fn kind(&self) -> CallErrorKind {
        match self {
            CallError::HandshakeRejected { .. }
            | CallError::Handshake(_)
            | CallError::InvalidDescriptor(_) => CallErrorKind::Handshake,
            CallError::CapabilityUnavailable => CallErrorKind::Capability,
            CallError::Join(_) => CallErrorKind::Setup,
            CallError::Teardown(_) => CallErrorKind::Teardown,
        }
    }
}
