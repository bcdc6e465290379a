//! Server-rendered views for the gateway routes.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Reasons listed on the payment-failed page. Declarative content, never
/// derived from input.
const FAILURE_REASONS: [&str; 4] = [
    "The card was declined by the issuing bank",
    "The payment session expired before it was completed",
    "The verification link was already used",
    "A temporary problem occurred at the payment provider",
];

const STYLES: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;\
font-family:system-ui,sans-serif;background:#faf7f2;color:#2b2b2b}\
.card{max-width:28rem;padding:2.5rem;text-align:center}\
.brand{font-size:1.25rem;letter-spacing:.3em;text-transform:uppercase;margin-bottom:1.5rem}\
.spinner{width:2.5rem;height:2.5rem;margin:0 auto 1rem;border:3px solid #e8e0d4;\
border-top-color:#b98a4e;border-radius:50%;animation:spin .8s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
.message{font-weight:600}\
ul{text-align:left}\
.actions{margin-top:1.5rem;display:flex;gap:.75rem;justify-content:center}\
.button{padding:.6rem 1.2rem;border-radius:.4rem;background:#b98a4e;color:#fff;text-decoration:none}\
.button.secondary{background:#e8e0d4;color:#2b2b2b}";

fn head(title: &str, extra: Markup) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            style { (PreEscaped(STYLES)) }
            (extra)
        }
    }
}

/// Waiting view shown while the browser follows the zero-delay refresh to
/// `target`. Deliberately offers no user-actionable controls; it only
/// covers the instant before the navigation lands.
pub fn redirecting_page(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head("Redirecting", html! {
                meta http-equiv="refresh" content=(format!("0;url={target}"));
            }))
            body {
                main class="card" {
                    div class="brand" { "Hive Studio" }
                    div class="spinner" {}
                    p { "One moment. We are taking you to the verification page." }
                }
            }
        }
    }
}

/// Terminal failure screen. No automatic transition happens here; recovery
/// is left entirely to the user.
pub fn failure_page(message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head("Payment failed", html! {}))
            body {
                main class="card" {
                    div class="brand" { "Hive Studio" }
                    h1 { "We could not complete your booking" }
                    p class="message" { (message) }
                    p { "Common reasons this happens:" }
                    ul {
                        @for reason in FAILURE_REASONS {
                            li { (reason) }
                        }
                    }
                    div class="actions" {
                        a class="button" href="/dashboard" { "Try again" }
                        a class="button secondary" href="/contact" { "Contact support" }
                    }
                }
            }
        }
    }
}
