use super::error::CallError;
use super::types::{SessionDescriptor, SessionEvent};
use tokio::sync::mpsc;
use tracing::info;

/// Call-initiation backend that hands out session descriptors
#[async_trait::async_trait]
pub trait CallBackend: Send + Sync {
    /// Request a session descriptor for a new call
    async fn request_session(&self) -> Result<SessionDescriptor, CallError>;
}

/// Real-time voice session capability
///
/// Implementations own the media transport. The controller only joins,
/// leaves and listens to events.
#[async_trait::async_trait]
pub trait RealtimeSession: Send + Sync {
    /// Join the call identified by `locator`
    ///
    /// Returns a channel receiver that will receive status and transcript events
    async fn join_call(&mut self, locator: &str) -> Result<mpsc::Receiver<SessionEvent>, CallError>;

    /// Leave the call and release the transport
    async fn leave_call(&mut self) -> Result<(), CallError>;

    /// Get session name for logging
    fn name(&self) -> &str;
}

/// Creates real-time sessions for the runtime environment
pub trait RealtimeSessionFactory: Send + Sync {
    /// Create a fresh session, or fail with `CapabilityUnavailable`
    fn create(&self) -> Result<Box<dyn RealtimeSession>, CallError>;
}

/// Factory for environments without a real-time capability
pub struct UnavailableSessionFactory;

impl RealtimeSessionFactory for UnavailableSessionFactory {
    fn create(&self) -> Result<Box<dyn RealtimeSession>, CallError> {
        Err(CallError::CapabilityUnavailable)
    }
}

/// The "listening" visual indicator next to the avatar control
pub trait ListeningIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Indicator that only logs its transitions (headless hosts)
pub struct TracingIndicator;

impl ListeningIndicator for TracingIndicator {
    fn show(&self) {
        info!("Listening indicator shown");
    }

    fn hide(&self) {
        info!("Listening indicator hidden");
    }
}
