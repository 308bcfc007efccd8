//! Conversation pipeline: intake, classification, reply fetch, log append
//!
//! Each `send` appends the user message, updates the current symptom and
//! spawns a reply fetch tagged with a request id. Only the completion for the
//! latest request is appended; a newer send aborts the older fetch, and any
//! completion that still arrives for a superseded request is dropped.

use healthlynk_assist::ResponseSource;
use healthlynk_core::{Classifier, CurrentSymptom, Message, DEFAULT_GREETING};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Reply appended when the response source fails
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having some technical difficulties connecting to my knowledge base. Please try again in a moment, or check your internet connection.";

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    AwaitingResponse { request: RequestId },
    Disposed,
}

struct Session {
    messages: Vec<Message>,
    current_symptom: Option<CurrentSymptom>,
    generation: RequestId,
    in_flight: Option<JoinHandle<()>>,
    last_id: i64,
    disposed: bool,
}

impl Session {
    fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            current_symptom: None,
            generation: 0,
            in_flight: None,
            last_id: 0,
            disposed: false,
        };
        let id = session.next_message_id();
        session.messages.push(Message::assistant(id, DEFAULT_GREETING));
        session
    }

    /// Creation time in ms, bumped to stay strictly increasing
    fn next_message_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Apply a finished fetch if it is still the latest request
fn complete(
    session: &Mutex<Session>,
    state_tx: &watch::Sender<PipelineState>,
    request: RequestId,
    reply: String,
) -> bool {
    let mut session = lock(session);
    if session.disposed || session.generation != request {
        debug!(request, latest = session.generation, "dropping stale response");
        return false;
    }

    let id = session.next_message_id();
    session.messages.push(Message::assistant(id, reply));
    session.in_flight = None;
    state_tx.send_replace(PipelineState::Idle);
    true
}

/// One chat session
pub struct Conversation {
    classifier: Arc<Classifier>,
    source: Arc<dyn ResponseSource>,
    session: Arc<Mutex<Session>>,
    state_tx: Arc<watch::Sender<PipelineState>>,
}

impl Conversation {
    pub fn new(classifier: Arc<Classifier>, source: Arc<dyn ResponseSource>) -> Self {
        let (state_tx, _) = watch::channel(PipelineState::Idle);
        Self {
            classifier,
            source,
            session: Arc::new(Mutex::new(Session::new())),
            state_tx: Arc::new(state_tx),
        }
    }

    /// Submit a user message.
    ///
    /// Returns `None` without touching any state when `text` is blank or the
    /// conversation is disposed. Must be called within a tokio runtime.
    pub fn send(&self, text: &str) -> Option<RequestId> {
        if text.trim().is_empty() {
            return None;
        }

        let detected = self.classifier.detect(text);
        let condition = detected.map(|p| p.id.clone());
        let symptom = detected.map(|p| CurrentSymptom {
            name: p.display_name().to_string(),
            severity: p.effective_severity(),
        });

        let mut session = lock(&self.session);
        if session.disposed {
            debug!("send after dispose ignored");
            return None;
        }

        let id = session.next_message_id();
        session.messages.push(Message::user(id, text));
        if let Some(symptom) = symptom {
            session.current_symptom = Some(symptom);
        }

        session.generation += 1;
        let request = session.generation;
        if let Some(previous) = session.in_flight.take() {
            previous.abort();
        }

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.session);
        let state_tx = Arc::clone(&self.state_tx);
        let text = text.to_string();
        let task = tokio::spawn(async move {
            let reply = match source.fetch_response(&text, condition.as_deref()).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(request, error = %e, "reply fetch failed, using fallback");
                    FALLBACK_REPLY.to_string()
                }
            };
            complete(&shared, &state_tx, request, reply);
        });

        session.in_flight = Some(task);
        self.state_tx
            .send_replace(PipelineState::AwaitingResponse { request });
        info!(request, "message sent");
        Some(request)
    }

    /// Resolves once no request is outstanding
    pub async fn wait_idle(&self) {
        let mut rx = self.state_tx.subscribe();
        // the sender lives in `self`, so the channel cannot close here
        let _ = rx
            .wait_for(|state| !matches!(state, PipelineState::AwaitingResponse { .. }))
            .await;
    }

    pub fn state(&self) -> PipelineState {
        *self.state_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state_tx.subscribe()
    }

    pub fn messages(&self) -> Vec<Message> {
        lock(&self.session).messages.clone()
    }

    pub fn current_symptom(&self) -> Option<CurrentSymptom> {
        lock(&self.session).current_symptom.clone()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn is_disposed(&self) -> bool {
        lock(&self.session).disposed
    }

    /// Abort any in-flight fetch; later sends are ignored
    pub fn dispose(&self) {
        let mut session = lock(&self.session);
        if session.disposed {
            return;
        }
        session.disposed = true;
        if let Some(task) = session.in_flight.take() {
            task.abort();
        }
        self.state_tx.send_replace(PipelineState::Disposed);
        info!(messages = session.messages.len(), "conversation disposed");
    }
}

impl Drop for Conversation {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.session).in_flight.take() {
            task.abort();
        }
    }
}
