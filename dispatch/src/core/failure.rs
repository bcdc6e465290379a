//! Terminal failure-message resolution.

/// Shown when the failure route carries no usable `message` parameter.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Payment verification failed. Please try again.";

/// Resolve the user-facing failure message.
///
/// The upstream message is displayed verbatim, never interpreted or
/// classified. An absent or empty parameter falls back to the default.
pub fn failure_message(param: Option<&str>) -> &str {
    match param {
        Some(message) if !message.is_empty() => message,
        _ => DEFAULT_FAILURE_MESSAGE,
    }
}
