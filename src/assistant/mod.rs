//! Assistant: the portfolio chat widget core.
//!
//! DESIGN
//! ======
//! Two pieces, leaf first:
//! - [`CompletionClient`]: one call to the hosted model, every outcome
//!   flattened to display text.
//! - [`ConversationController`]: transcript, visibility, input buffer and
//!   the single-flight rule for one mounted widget.
//!
//! Both take their configuration explicitly ([`AssistantConfig`]) rather
//! than reading ambient globals, so each can be built in a test on its own.

pub mod completion;
pub mod config;
pub mod controller;
pub mod locale;
pub mod persona;
pub mod state;
pub mod view;

pub use completion::CompletionClient;
pub use config::AssistantConfig;
pub use controller::ConversationController;
pub use locale::Locale;
pub use state::{Phase, Role, Turn};
pub use view::{ChatView, NoopView};

use std::sync::Arc;

/// Mount a widget using configuration resolved from the environment.
#[must_use]
pub fn mount(config: &AssistantConfig, view: Arc<dyn ChatView>) -> ConversationController {
    let client = CompletionClient::from_env(config);
    ConversationController::new(client, config.locale, view)
}
