//! Conversation controller: single-flight turn taking for one widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host calls [`ConversationController::submit`] from its input
//! handler. The user turn is appended synchronously; the completion runs in
//! a spawned task that appends exactly one bot turn when it settles. Both
//! appends are followed by a [`ChatView::scroll_to_latest`] call.
//!
//! TRADE-OFFS
//! ==========
//! Submissions made while a reply is pending are dropped rather than queued,
//! and there is no per-request timeout beyond the HTTP client's own. The only
//! cancellation point is unmount: dropping the controller aborts the
//! in-flight task so a late reply never lands in a widget that is gone.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

use super::completion::CompletionClient;
use super::locale::Locale;
use super::state::{ConversationState, Phase, Turn};
use super::view::ChatView;

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

struct Shared {
    state: Mutex<ConversationState>,
    client: CompletionClient,
    view: Arc<dyn ChatView>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(&self, reply: String) {
        let appended = {
            let mut state = self.state();
            if state.settle(reply) { state.last_turn().cloned() } else { None }
        };
        if let Some(turn) = appended {
            self.view.scroll_to_latest(&turn);
        }
    }
}

/// Owns the state of one mounted assistant widget.
pub struct ConversationController {
    shared: Arc<Shared>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl ConversationController {
    /// Mount a widget: closed, idle, transcript holding the seed greeting.
    #[must_use]
    pub fn new(client: CompletionClient, locale: Locale, view: Arc<dyn ChatView>) -> Self {
        let shared = Shared { state: Mutex::new(ConversationState::new(locale)), client, view };
        Self { shared: Arc::new(shared), in_flight: Mutex::new(None) }
    }

    // =========================================================================
    // TURN TAKING
    // =========================================================================

    /// Submit `text` as the visitor's next turn.
    ///
    /// Returns `None` when the submission is dropped (blank text, or a reply
    /// still pending). Otherwise returns the handle of the task that will
    /// append the bot reply; awaiting it is optional.
    ///
    /// Outside a tokio runtime nothing can carry the reply, so the
    /// submission is dropped and the state is left untouched.
    pub fn submit(&self, text: &str) -> Option<JoinHandle<()>> {
        let Ok(runtime) = Handle::try_current() else {
            warn!("assistant: submission dropped, no tokio runtime");
            return None;
        };
        let (message, user_turn) = {
            let mut state = self.shared.state();
            let Some(message) = state.begin_submit(text) else {
                debug!(pending = state.is_pending(), "assistant: submission dropped");
                return None;
            };
            (message, state.last_turn().cloned())
        };
        if let Some(turn) = &user_turn {
            self.shared.view.scroll_to_latest(turn);
        }

        let shared = Arc::clone(&self.shared);
        let handle = runtime.spawn(async move {
            let reply = shared.client.complete(&message).await;
            shared.settle(reply);
        });
        *self.in_flight_slot() = Some(handle.abort_handle());
        Some(handle)
    }

    /// Submit whatever is currently in the input buffer.
    pub fn submit_input(&self) -> Option<JoinHandle<()>> {
        let text = self.shared.state().input().to_owned();
        self.submit(&text)
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.shared.state().set_input(text);
    }

    #[must_use]
    pub fn input(&self) -> String {
        self.shared.state().input().to_owned()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared.state().phase()
    }

    /// Copy of the transcript in display order.
    #[must_use]
    pub fn transcript(&self) -> Vec<Turn> {
        self.shared.state().transcript().to_vec()
    }

    // =========================================================================
    // VISIBILITY
    // =========================================================================

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.shared.state().is_open()
    }

    pub fn open(&self) {
        self.shared.state().set_open(true);
    }

    pub fn close(&self) {
        self.shared.state().set_open(false);
    }

    /// Flip visibility; returns the new value.
    pub fn toggle(&self) -> bool {
        let mut state = self.shared.state();
        let open = !state.is_open();
        state.set_open(open);
        open
    }

    // =========================================================================
    // LOCALIZED CHROME
    // =========================================================================

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.shared.state().locale()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.shared.state().set_locale(locale);
    }

    /// Switch to the other locale; returns the new one.
    pub fn toggle_locale(&self) -> Locale {
        let mut state = self.shared.state();
        let next = state.locale().toggled();
        state.set_locale(next);
        next
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.locale().strings().placeholder
    }

    #[must_use]
    pub fn launcher_label(&self) -> &'static str {
        self.locale().strings().ask_me
    }

    /// Localized "thinking" label while a reply is pending.
    #[must_use]
    pub fn thinking_label(&self) -> Option<&'static str> {
        let state = self.shared.state();
        state
            .is_pending()
            .then(|| state.locale().strings().thinking)
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Tear the widget down, abandoning any pending reply.
    pub fn unmount(self) {
        drop(self);
    }

    fn in_flight_slot(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ConversationController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight_slot().take() {
            if !handle.is_finished() {
                debug!("assistant: unmounted with reply pending, aborting");
                handle.abort();
            }
        }
    }
}
