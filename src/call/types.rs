use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remote session status reported by the real-time voice provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Idle,
    Connecting,
    Connected,
    Disconnected,
    Error,
}

impl CallStatus {
    /// Whether the remote side has ended the session
    pub fn is_terminal(self) -> bool {
        matches!(self, CallStatus::Disconnected | CallStatus::Error)
    }
}

/// Who said a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

/// A single utterance within a call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    /// Who spoke
    pub speaker: Speaker,

    /// Utterance text (may still be revised while not final)
    pub text: String,

    /// True once the utterance will not be revised
    pub is_final: bool,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>, is_final: bool) -> Self {
        Self {
            speaker,
            text: text.into(),
            is_final,
        }
    }
}

/// Events delivered by a joined real-time session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Remote status transition
    StatusChanged(CallStatus),

    /// Full ordered transcript after an update
    TranscriptUpdated(Vec<TranscriptEntry>),
}

/// Session descriptor returned by the call-initiation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Opaque locator used to join the streaming session
    #[serde(rename = "joinAddress", alias = "joinUrl", alias = "join_url")]
    pub join_address: String,

    /// Provider call identifier, if the backend forwards one
    #[serde(rename = "callId", default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
}

/// Controller-side phase, the authoritative gate for starting calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    /// No call in progress
    Idle,
    /// Start requested, handshake or join still in flight
    Connecting,
    /// Session joined and events flowing
    Active,
}

/// Point-in-time view of the controller's call
#[derive(Debug, Clone)]
pub struct CallSnapshot {
    /// Local call identifier (None when idle)
    pub call_id: Option<String>,

    /// Controller phase
    pub phase: CallPhase,

    /// Last status reported by the remote session
    pub remote_status: CallStatus,

    /// Join locator of the current call
    pub join_address: Option<String>,

    /// When the current call was requested
    pub started_at: Option<DateTime<Utc>>,

    /// Number of transcript entries received so far
    pub transcript_entries: usize,

    /// Whether a goodbye-triggered termination is pending
    pub termination_scheduled: bool,
}

/// Result of a `toggle()` on the avatar control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Ended,
    /// A call is still connecting; the toggle was rejected
    Ignored,
    /// The call was ended before its session joined
    Cancelled,
}
