//! Conversation state for one mounted assistant widget.
//!
//! DESIGN
//! ======
//! Pure state and transitions, no I/O. The controller wraps this in a lock
//! and performs the async call between [`ConversationState::begin_submit`]
//! and [`ConversationState::settle`]; keeping the transitions here lets the
//! single-flight and append-only rules be tested without a runtime.

use uuid::Uuid;

use super::locale::Locale;
use super::persona::SEED_GREETING;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Who spoke a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One message in the transcript. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    id: Uuid,
    role: Role,
    text: String,
}

impl Turn {
    fn new(role: Role, text: String) -> Self {
        Self { id: Uuid::new_v4(), role, text }
    }

    /// Stable key for hosts that diff rendered lists.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether a completion is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Awaiting,
}

#[derive(Clone, Debug)]
pub struct ConversationState {
    transcript: Vec<Turn>,
    pending: bool,
    input: String,
    open: bool,
    locale: Locale,
}

impl ConversationState {
    /// Fresh widget: closed, idle, transcript holding only the seed greeting.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            transcript: vec![Turn::new(Role::Bot, SEED_GREETING.to_owned())],
            pending: false,
            input: String::new(),
            open: false,
            locale,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    #[must_use]
    pub fn last_turn(&self) -> Option<&Turn> {
        self.transcript.last()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending { Phase::Awaiting } else { Phase::Idle }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// `Idle -> Awaiting`.
    ///
    /// Returns the trimmed message to send, or `None` when the submission is
    /// dropped: blank text, or a request already in flight. A dropped
    /// submission leaves every field untouched, including the input buffer.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        let message = text.trim();
        if message.is_empty() || self.pending {
            return None;
        }

        self.transcript.push(Turn::new(Role::User, message.to_owned()));
        self.input.clear();
        self.pending = true;
        Some(message.to_owned())
    }

    /// `Awaiting -> Idle`, appending the bot reply.
    ///
    /// Returns `false` (and appends nothing) if no request was in flight.
    pub fn settle(&mut self, reply: String) -> bool {
        if !self.pending {
            return false;
        }
        self.transcript.push(Turn::new(Role::Bot, reply));
        self.pending = false;
        true
    }
}
