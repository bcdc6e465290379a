//! HTTP route handlers for the callback gateway.

use std::collections::HashMap;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::response::Html;
use axum::routing::get;

use dispatch::core::failure::failure_message;
use dispatch::core::params::CallbackParams;
use dispatch::derive::derive_target;

use crate::state::AppState;
use crate::views;

/// Build the gateway router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/verify-redirect", get(verify_redirect))
        .route("/payment-failed", get(payment_failed))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /verify-redirect - derive the forwarding target and hand the
/// browser off to it.
///
/// One derivation per request, and always a navigation: partial or absent
/// verification parameters are never an error here, the destination
/// endpoint judges them. The navigation is fire-and-forget; the response
/// body is only the waiting view that covers the refresh.
async fn verify_redirect(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Html<String> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let params = CallbackParams::from_map(&query);
    let target = derive_target(host, &params, &state.config);
    Html(views::redirecting_page(&target).into_string())
}

/// GET /payment-failed - terminal failure screen.
///
/// Shows the upstream message verbatim (or the fixed default) and leaves
/// recovery to the user: retry via the dashboard, or contact support.
async fn payment_failed(Query(query): Query<HashMap<String, String>>) -> Html<String> {
    let message = failure_message(query.get("message").map(String::as_str));
    Html(views::failure_page(message).into_string())
}
