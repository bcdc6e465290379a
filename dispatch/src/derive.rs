//! Full redirect derivation for one inbound callback request.

use tracing::info;

use crate::config::GatewayConfig;
use crate::core::environment::{self, Environment};
use crate::core::params::CallbackParams;
use crate::core::target::{build_target, resolve_origin};
use crate::core::token::compose_token;

/// Derive the redirect target for one request.
///
/// Runs the full pipeline: classify the environment from the host, compose
/// the verification token, resolve the base origin, build the target URL.
/// Total over its inputs: any combination of present, partial, or absent
/// parameters yields a well-formed URL. Partial verification parameters are
/// forwarded as-is; judging them is the destination endpoint's job.
pub fn derive_target(host_header: &str, params: &CallbackParams, config: &GatewayConfig) -> String {
    let env = Environment::from_host_name(environment::host_name(host_header));
    let token = compose_token(params.selector.as_deref(), params.validator.as_deref());

    // Local development serves over plain HTTP, so the request origin is
    // always the http scheme on the incoming Host header.
    let request_origin = format!("http://{host_header}");
    let origin = resolve_origin(env, &request_origin, &config.remote_origin);
    let target = build_target(origin, params.email.as_deref(), token.as_deref());

    info!(
        environment = ?env,
        forwards_email = params.email.as_deref().is_some_and(|email| !email.is_empty()),
        forwards_token = token.is_some(),
        target = %target,
        "derived redirect target"
    );
    target
}
