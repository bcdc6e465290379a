//! Redirect-target construction.

use crate::core::environment::Environment;

/// Fixed path of the verification-completion endpoint.
pub const VERIFICATION_PATH: &str = "/email-verification";

/// Resolve the base origin for the redirect target.
///
/// Local traffic is sent back to its own origin. Everything else goes to
/// the configured remote origin, which historically points at a local
/// development server (see `GatewayConfig::remote_origin`).
pub fn resolve_origin<'a>(
    env: Environment,
    request_origin: &'a str,
    remote_origin: &'a str,
) -> &'a str {
    match env {
        Environment::Local => request_origin,
        Environment::Remote => remote_origin,
    }
}

/// Build the absolute target URL from an origin and the forward parameters.
///
/// `email` is component-encoded; the token is appended verbatim so the `|`
/// separator survives on the wire. `email` always precedes `token`, a
/// present-but-empty email is not forwarded, and an empty forward set
/// produces no `?` at all.
pub fn build_target(origin: &str, email: Option<&str>, token: Option<&str>) -> String {
    let mut query = String::new();
    if let Some(email) = email.filter(|email| !email.is_empty()) {
        query.push_str("email=");
        query.push_str(&urlencoding::encode(email));
    }
    if let Some(token) = token {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str("token=");
        query.push_str(token);
    }
    if query.is_empty() {
        format!("{origin}{VERIFICATION_PATH}")
    } else {
        format!("{origin}{VERIFICATION_PATH}?{query}")
    }
}
