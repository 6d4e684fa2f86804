//! Assistant configuration injected into the completion client and the
//! conversation controller at construction.

use super::locale::Locale;
use super::persona::{FallbackStrings, Persona};
use crate::llm::types::LlmError;

pub const DEFAULT_ASSISTANT_MAX_TOKENS: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    pub locale: Locale,
    pub persona: Persona,
    pub fallbacks: FallbackStrings,
    pub max_tokens: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            persona: Persona::default(),
            fallbacks: FallbackStrings::default(),
            max_tokens: DEFAULT_ASSISTANT_MAX_TOKENS,
        }
    }
}

impl AssistantConfig {
    /// Build assistant config from environment variables.
    ///
    /// Optional:
    /// - `ASSISTANT_LOCALE`: `en` (default) or `am`
    /// - `ASSISTANT_MAX_TOKENS`: default 1024
    ///
    /// Persona and fallback strings always start from their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] for an unknown locale.
    pub fn from_env() -> Result<Self, LlmError> {
        let locale = match std::env::var("ASSISTANT_LOCALE") {
            Ok(raw) => raw.parse()?,
            Err(_) => Locale::default(),
        };
        let max_tokens = std::env::var("ASSISTANT_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_ASSISTANT_MAX_TOKENS);

        Ok(Self { locale, max_tokens, ..Self::default() })
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
