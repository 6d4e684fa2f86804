//! Shared test helpers: environment serialisation, log capture, LLM mocks.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use crate::llm::types::{ChatResponse, LlmChat, LlmError, Message};

// =============================================================================
// ENV
// =============================================================================

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that mutate process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// LOG CAPTURE
// =============================================================================

/// In-memory writer for a `tracing-subscriber` fmt layer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a capturing subscriber as the thread-local default.
    ///
    /// Only sees events emitted on this thread, which covers
    /// `#[tokio::test]`'s current-thread runtime including spawned tasks.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// =============================================================================
// MockLlm
// =============================================================================

/// What a [`MockLlm`] does when called.
pub enum MockReply {
    Text(&'static str),
    NoText,
    Fail(fn() -> LlmError),
    Panic,
}

/// Scripted [`LlmChat`] double that records every call.
///
/// With `gated`, each call waits for [`MockLlm::release`] before replying,
/// which keeps a request in flight for as long as a test needs.
pub struct MockLlm {
    reply: MockReply,
    gate: Option<Notify>,
    calls: Mutex<Vec<(String, Vec<Message>)>>,
}

impl MockLlm {
    pub fn new(reply: MockReply) -> Self {
        Self { reply, gate: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn gated(reply: MockReply) -> Self {
        Self { reply, gate: Some(Notify::new()), calls: Mutex::new(Vec::new()) }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<Message>)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, _max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((system.to_owned(), messages.to_vec()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            MockReply::Text(text) => Ok(ChatResponse {
                text: vec![(*text).to_owned()],
                model: "mock".into(),
                finish_reason: Some("STOP".into()),
                input_tokens: 0,
                output_tokens: 0,
            }),
            MockReply::NoText => Ok(ChatResponse { model: "mock".into(), ..ChatResponse::default() }),
            MockReply::Fail(make_err) => Err(make_err()),
            MockReply::Panic => panic!("mock provider exploded"),
        }
    }
}
