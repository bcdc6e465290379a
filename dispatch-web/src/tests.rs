//! End-to-end tests for the gateway routes, run against the real router.

use axum::Router;
use axum::body::Body;
use axum::http::header::HOST;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use dispatch::config::GatewayConfig;
use dispatch::core::failure::DEFAULT_FAILURE_MESSAGE;

use crate::routes;
use crate::state::AppState;

fn app() -> Router {
    app_with(GatewayConfig::default())
}

fn app_with(config: GatewayConfig) -> Router {
    routes::router().with_state(AppState::new(config))
}

async fn get(app: Router, uri: &str, host: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .header(HOST, host)
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn local_callback_forwards_to_its_own_origin() {
    let (status, body) = get(
        app(),
        "/verify-redirect?selector=abc&validator=xyz&email=a@b.com",
        "localhost:3000",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // The & separating the forward parameters is entity-escaped inside the
    // meta-refresh attribute.
    assert!(body.contains(
        "0;url=http://localhost:3000/email-verification?email=a%40b.com&amp;token=abc|xyz"
    ));
}

#[tokio::test]
async fn remote_callback_forwards_to_the_configured_origin() {
    let (status, body) = get(
        app(),
        "/verify-redirect?selector=abc&validator=xyz",
        "app.example.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0;url=http://localhost:3002/email-verification?token=abc|xyz"));
}

#[tokio::test]
async fn bare_callback_still_navigates() {
    let (status, body) = get(app(), "/verify-redirect", "app.example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("content=\"0;url=http://localhost:3002/email-verification\""));
}

#[tokio::test]
async fn custom_remote_origin_is_used_for_remote_hosts() {
    let config = GatewayConfig {
        remote_origin: "https://booking.example.net".to_string(),
    };
    let (_, body) = get(app_with(config), "/verify-redirect", "app.example.com").await;

    assert!(body.contains("content=\"0;url=https://booking.example.net/email-verification\""));
}

#[tokio::test]
async fn waiting_view_has_no_actionable_controls() {
    let (_, body) = get(app(), "/verify-redirect", "localhost").await;

    assert!(body.contains("spinner"));
    assert!(!body.contains("<a "));
    assert!(!body.contains("<button"));
}

#[tokio::test]
async fn failure_page_shows_the_message_verbatim() {
    let (status, body) = get(
        app(),
        "/payment-failed?message=Card%20declined",
        "app.example.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Card declined"));
}

#[tokio::test]
async fn failure_page_defaults_when_the_message_is_absent() {
    let (_, body) = get(app(), "/payment-failed", "app.example.com").await;

    assert!(body.contains(DEFAULT_FAILURE_MESSAGE));
}

#[tokio::test]
async fn failure_page_offers_retry_and_support() {
    let (_, body) = get(app(), "/payment-failed", "app.example.com").await;

    assert!(body.contains("href=\"/dashboard\""));
    assert!(body.contains("href=\"/contact\""));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(app(), "/health", "localhost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
