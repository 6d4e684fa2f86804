//! Localized chat widget strings.
//!
//! Only the three strings the widget renders live here. The seed greeting is
//! a fixed literal and is not part of the table.

use crate::llm::types::LlmError;

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;

/// Display language for the widget chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    /// Amharic.
    Am,
}

/// Strings the widget renders but never interprets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatStrings {
    /// Input field placeholder.
    pub placeholder: &'static str,
    /// Launcher label shown while the widget is closed.
    pub ask_me: &'static str,
    /// Shown in place of a bot turn while a reply is pending.
    pub thinking: &'static str,
}

const EN: ChatStrings = ChatStrings {
    placeholder: "Ask my AI assistant about my skills...",
    ask_me: "Ask AI about me",
    thinking: "Thinking...",
};

const AM: ChatStrings = ChatStrings {
    placeholder: "ስለ ክህሎቶቼ AI ይጠይቁ...",
    ask_me: "AIን ስለእኔ ይጠይቁ",
    thinking: "እያሰበ ነው...",
};

impl Locale {
    #[must_use]
    pub fn strings(self) -> &'static ChatStrings {
        match self {
            Self::En => &EN,
            Self::Am => &AM,
        }
    }

    /// The other locale; the site only ever offers two.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Am,
            Self::Am => Self::En,
        }
    }

    /// Short code as shown on the language switch.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Am => "AM",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = LlmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "am" => Ok(Self::Am),
            other => Err(LlmError::ConfigParse(format!("unknown locale '{other}' (expected 'en' or 'am')"))),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
