use super::backend::{CallBackend, ListeningIndicator, RealtimeSession, RealtimeSessionFactory};
use super::error::CallError;
use super::goodbye::GoodbyeDetector;
use super::settings::CallSettings;
use super::types::{
    CallPhase, CallSnapshot, CallStatus, SessionEvent, ToggleOutcome, TranscriptEntry,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Controls the lifecycle of one voice call at a time
///
/// Clones share the same call, so the avatar control, the event pump and
/// the goodbye timer all drive one state machine.
#[derive(Clone)]
pub struct CallController {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn CallBackend>,
    sessions: Arc<dyn RealtimeSessionFactory>,
    indicator: Arc<dyn ListeningIndicator>,
    detector: GoodbyeDetector,
    goodbye_delay: Duration,
    state: Mutex<CallState>,
}

/// Mutable call state, only touched under the controller lock
struct CallState {
    phase: CallPhase,

    /// Bumped on every start and end; tasks from an older call compare against it
    generation: u64,

    call_id: Option<String>,
    started_at: Option<DateTime<Utc>>,
    join_address: Option<String>,
    remote_status: CallStatus,
    transcripts: Vec<TranscriptEntry>,
    termination_scheduled: bool,

    /// Joined session (only while Active)
    session: Option<Box<dyn RealtimeSession>>,

    /// Handle for the event pump task
    event_task: Option<JoinHandle<()>>,
}

impl CallState {
    fn new() -> Self {
        Self {
            phase: CallPhase::Idle,
            generation: 0,
            call_id: None,
            started_at: None,
            join_address: None,
            remote_status: CallStatus::Idle,
            transcripts: Vec::new(),
            termination_scheduled: false,
            session: None,
            event_task: None,
        }
    }

    /// Enter Connecting for a fresh call and return its generation
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = CallPhase::Connecting;
        self.call_id = Some(format!("call-{}", uuid::Uuid::new_v4()));
        self.started_at = Some(Utc::now());
        self.join_address = None;
        self.remote_status = CallStatus::Idle;
        self.transcripts.clear();
        self.termination_scheduled = false;
        self.generation
    }

    /// Back to Idle, handing out whatever the call still owned
    fn reset(&mut self) -> (Option<Box<dyn RealtimeSession>>, Option<JoinHandle<()>>) {
        self.generation += 1;
        self.phase = CallPhase::Idle;
        self.call_id = None;
        self.started_at = None;
        self.join_address = None;
        self.remote_status = CallStatus::Idle;
        self.transcripts.clear();
        self.termination_scheduled = false;
        (self.session.take(), self.event_task.take())
    }

    fn call_label(&self) -> &str {
        self.call_id.as_deref().unwrap_or("<none>")
    }
}

impl CallController {
    /// Create a controller with its collaborators
    pub fn new(
        backend: Arc<dyn CallBackend>,
        sessions: Arc<dyn RealtimeSessionFactory>,
        indicator: Arc<dyn ListeningIndicator>,
        settings: CallSettings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                sessions,
                indicator,
                detector: GoodbyeDetector::new(&settings.goodbye_phrases),
                goodbye_delay: settings.goodbye_delay,
                state: Mutex::new(CallState::new()),
            }),
        }
    }

    /// Avatar control interaction: start when idle, end when active
    ///
    /// A call that is still connecting rejects the toggle. A start that was
    /// ended before its session joined reports `Cancelled`.
    pub async fn toggle(&self) -> Result<ToggleOutcome, CallError> {
        let mut state = self.inner.state.lock().await;
        let phase = state.phase;

        match phase {
            CallPhase::Idle => {
                let generation = state.begin();
                drop(state);
                if self.run_start(generation).await? {
                    Ok(ToggleOutcome::Started)
                } else {
                    Ok(ToggleOutcome::Cancelled)
                }
            }
            CallPhase::Connecting => {
                debug!("Toggle ignored, call {} still connecting", state.call_label());
                Ok(ToggleOutcome::Ignored)
            }
            CallPhase::Active => {
                drop(state);
                self.end_call().await?;
                Ok(ToggleOutcome::Ended)
            }
        }
    }

    /// Start a call
    ///
    /// No-op when a call is already connecting or active. On failure the
    /// controller is back to idle and the error is returned.
    pub async fn start_call(&self) -> Result<(), CallError> {
        let generation = {
            let mut state = self.inner.state.lock().await;
            if state.phase != CallPhase::Idle {
                warn!("Call {} already in progress", state.call_label());
                return Ok(());
            }
            state.begin()
        };

        self.run_start(generation).await.map(|_| ())
    }

    /// End the current call
    ///
    /// No-op when idle. Teardown failures are logged and suppressed.
    pub async fn end_call(&self) -> Result<(), CallError> {
        self.end(None).await;
        Ok(())
    }

    /// End any call when the hosting component goes away
    pub async fn shutdown(&self) {
        info!("Shutting down call controller");
        self.end(None).await;
    }

    /// Whether a call is connecting or active
    pub async fn is_active(&self) -> bool {
        self.phase().await != CallPhase::Idle
    }

    pub async fn phase(&self) -> CallPhase {
        self.inner.state.lock().await.phase
    }

    /// Get a point-in-time view of the current call
    pub async fn snapshot(&self) -> CallSnapshot {
        let state = self.inner.state.lock().await;

        CallSnapshot {
            call_id: state.call_id.clone(),
            phase: state.phase,
            remote_status: state.remote_status,
            join_address: state.join_address.clone(),
            started_at: state.started_at,
            transcript_entries: state.transcripts.len(),
            termination_scheduled: state.termination_scheduled,
        }
    }

    /// Get the transcript of the current call
    pub async fn transcript(&self) -> Vec<TranscriptEntry> {
        self.inner.state.lock().await.transcripts.clone()
    }

    /// Returns false when the call was ended before it became active
    async fn run_start(&self, generation: u64) -> Result<bool, CallError> {
        self.inner.indicator.show();

        match self.connect(generation).await {
            Ok(joined) => Ok(joined),
            Err(e) => {
                error!("Failed to start call: {}", e);
                self.abort(generation).await;
                Err(e)
            }
        }
    }

    async fn connect(&self, generation: u64) -> Result<bool, CallError> {
        let descriptor = self.inner.backend.request_session().await?;
        let mut session = self.inner.sessions.create()?;

        {
            let mut state = self.inner.state.lock().await;
            if state.generation != generation {
                info!("Call ended before joining, dropping session descriptor");
                return Ok(false);
            }
            state.join_address = Some(descriptor.join_address.clone());
            state.remote_status = CallStatus::Connecting;
        }

        info!(
            "Joining call via {} ({})",
            session.name(),
            descriptor.join_address
        );

        let events = session.join_call(&descriptor.join_address).await?;

        let mut state = self.inner.state.lock().await;
        if state.generation != generation {
            drop(state);
            info!("Call ended while joining, leaving session");
            if let Err(e) = session.leave_call().await {
                warn!("Failed to leave cancelled call: {}", e);
            }
            return Ok(false);
        }

        state.session = Some(session);
        state.phase = CallPhase::Active;
        state.event_task = Some(self.spawn_event_pump(generation, events));

        info!("Call {} started successfully", state.call_label());

        Ok(true)
    }

    /// Revert a failed start, unless the call was already ended meanwhile
    async fn abort(&self, generation: u64) {
        {
            let mut state = self.inner.state.lock().await;
            if state.generation != generation {
                return;
            }
            state.reset();
        }

        self.inner.indicator.hide();
    }

    /// End the call; with `Some(generation)` only if that call is still current
    async fn end(&self, generation: Option<u64>) {
        let (session, event_task) = {
            let mut state = self.inner.state.lock().await;

            if state.phase == CallPhase::Idle {
                debug!("No active call to end");
                return;
            }
            if generation.is_some_and(|g| g != state.generation) {
                debug!("Stale termination ignored");
                return;
            }

            info!("Ending call {}", state.call_label());
            state.reset()
        };

        self.inner.indicator.hide();

        if let Some(task) = event_task {
            task.abort();
        }

        if let Some(mut session) = session {
            if let Err(e) = session.leave_call().await {
                warn!("Failed to leave call (suppressed): {}", e);
            }
        }

        info!("Call ended");
    }

    fn spawn_event_pump(
        &self,
        generation: u64,
        mut events: mpsc::Receiver<SessionEvent>,
    ) -> JoinHandle<()> {
        let controller = self.clone();

        tokio::spawn(async move {
            debug!("Event pump started");

            while let Some(event) = events.recv().await {
                if !controller.handle_event(generation, event).await {
                    break;
                }
            }

            debug!("Event pump stopped");
        })
    }

    /// Dispatch one session event. Returns false once the call is over.
    async fn handle_event(&self, generation: u64, event: SessionEvent) -> bool {
        match event {
            SessionEvent::StatusChanged(status) => {
                let mut state = self.inner.state.lock().await;
                if state.generation != generation {
                    return false;
                }

                debug!("Remote status: {:?}", status);
                state.remote_status = status;

                if !status.is_terminal() {
                    return true;
                }

                info!(
                    "Remote session {:?}, cleaning up call {}",
                    status,
                    state.call_label()
                );

                // The pump is the current task, so its handle is dropped rather than aborted
                let (session, _pump) = state.reset();
                drop(state);
                drop(session);

                self.inner.indicator.hide();
                false
            }
            SessionEvent::TranscriptUpdated(transcripts) => {
                let goodbye = self.inner.detector.should_terminate(&transcripts);

                let mut state = self.inner.state.lock().await;
                if state.generation != generation {
                    return false;
                }

                if let Some(latest) = transcripts.last() {
                    debug!(
                        "Transcript {:?} (final={}): {}",
                        latest.speaker, latest.is_final, latest.text
                    );
                }
                state.transcripts = transcripts;

                if goodbye {
                    if state.termination_scheduled {
                        debug!("Goodbye termination already scheduled");
                    } else {
                        state.termination_scheduled = true;
                        info!(
                            "Goodbye detected, ending call in {:?}",
                            self.inner.goodbye_delay
                        );
                        self.schedule_termination(generation);
                    }
                }

                true
            }
        }
    }

    fn schedule_termination(&self, generation: u64) {
        let controller = self.clone();
        let delay = self.inner.goodbye_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.end(Some(generation)).await;
        });
    }
}
