//! Host view hooks.

use super::state::Turn;

/// Side-effect sink provided by whatever mounts the widget.
///
/// Called with the lock on conversation state released, once per transcript
/// append, with the turn that was just added.
pub trait ChatView: Send + Sync {
    /// Bring `latest` into view.
    fn scroll_to_latest(&self, latest: &Turn);
}

/// View that renders nothing. Used when no host is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopView;

impl ChatView for NoopView {
    fn scroll_to_latest(&self, _latest: &Turn) {}
}
