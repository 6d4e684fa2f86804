//! Shared error classification.

/// Stable machine-readable code and retry hint for an error.
///
/// Codes end up in diagnostic log events, so they must not change between
/// releases even if the display message does.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
