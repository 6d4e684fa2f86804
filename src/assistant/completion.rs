//! Completion client: one model call in, one displayable string out.
//!
//! DESIGN
//! ======
//! This is the boundary where typed [`LlmError`]s stop. Every outcome of a
//! call (no key configured, transport or decode failure, a panic inside the
//! provider, a reply with no text) is turned into one of the configured
//! fallback strings, so callers only ever see a non-empty `String`.
//!
//! There are no retries. A visitor who gets the system-error reply can
//! simply send the message again.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{error, info, warn};

use super::config::AssistantConfig;
use super::persona::{FallbackStrings, Persona};
use crate::error::ErrorCode;
use crate::llm::types::{LlmChat, LlmError, Message};
use crate::llm::LlmClient;

#[cfg(test)]
#[path = "completion_test.rs"]
mod tests;

/// The fixed instruction plus the visitor's message for a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    pub system_instruction: &'a str,
    pub user_message: &'a str,
}

impl CompletionRequest<'_> {
    fn messages(&self) -> Vec<Message> {
        vec![Message::user(self.user_message)]
    }
}

pub struct CompletionClient {
    backend: Option<Arc<dyn LlmChat>>,
    persona: Persona,
    fallbacks: FallbackStrings,
    max_tokens: u32,
}

impl CompletionClient {
    /// Client that calls `backend` for every completion.
    #[must_use]
    pub fn new(backend: Arc<dyn LlmChat>, config: &AssistantConfig) -> Self {
        Self {
            backend: Some(backend),
            persona: config.persona.clone(),
            fallbacks: config.fallbacks.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Client with no backend; every completion is the offline reply.
    #[must_use]
    pub fn disabled(config: &AssistantConfig) -> Self {
        Self {
            backend: None,
            persona: config.persona.clone(),
            fallbacks: config.fallbacks.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Resolve the backend from environment variables once, at startup.
    ///
    /// A missing key or unbuildable HTTP client is not fatal: the client
    /// comes up disabled and stays that way until the process restarts.
    #[must_use]
    pub fn from_env(config: &AssistantConfig) -> Self {
        Self::from_resolved(LlmClient::from_env(), config)
    }

    fn from_resolved(resolved: Result<LlmClient, LlmError>, config: &AssistantConfig) -> Self {
        match resolved {
            Ok(client) => {
                info!(model = client.model(), "assistant: LLM client initialized");
                Self::new(Arc::new(client), config)
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "assistant: LLM client not configured, replies will be offline");
                Self::disabled(config)
            }
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub fn request<'a>(&'a self, user_message: &'a str) -> CompletionRequest<'a> {
        CompletionRequest { system_instruction: self.persona.system_instruction(), user_message }
    }

    /// Run one completion and return text fit for a bot turn.
    ///
    /// Never fails and never returns an empty string. When disabled this
    /// returns without awaiting anything.
    pub async fn complete(&self, user_message: &str) -> String {
        let Some(backend) = &self.backend else {
            return self.fallbacks.offline.clone();
        };

        let request = self.request(user_message);
        let messages = request.messages();
        let call = backend.chat(self.max_tokens, request.system_instruction, &messages);

        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(response)) => {
                info!(
                    model = %response.model,
                    finish_reason = ?response.finish_reason,
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    "assistant: completion received"
                );
                response.reply_text().unwrap_or_else(|| {
                    warn!(finish_reason = ?response.finish_reason, "assistant: completion carried no text");
                    self.fallbacks.empty_reply.clone()
                })
            }
            Ok(Err(e)) => {
                error!(error = %e, code = e.error_code(), retryable = e.retryable(), "assistant: completion call failed");
                self.fallbacks.system_error.clone()
            }
            Err(_) => {
                error!(code = "E_PANIC", retryable = false, "assistant: completion call failed");
                self.fallbacks.system_error.clone()
            }
        }
    }
}
