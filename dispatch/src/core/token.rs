//! Verification-token composition.

/// Separator joining selector and validator into one forwardable token.
pub const TOKEN_SEPARATOR: char = '|';

/// Join the two verification sub-values into a single token.
///
/// Returns `Some` only when both are present and non-empty. Composition is
/// purely syntactic: neither value is validated, trimmed, or reordered.
pub fn compose_token(selector: Option<&str>, validator: Option<&str>) -> Option<String> {
    match (selector, validator) {
        (Some(selector), Some(validator)) if !selector.is_empty() && !validator.is_empty() => {
            Some(format!("{selector}{TOKEN_SEPARATOR}{validator}"))
        }
        _ => None,
    }
}
