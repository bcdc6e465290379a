//! Inbound-callback redirect derivation for the booking front-end.
//!
//! External systems (the email provider, the payment gateway) send the
//! user's browser back to us with identifying query parameters. This crate
//! decides where that browser goes next. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic derivation logic (environment
//!   classification, token composition, target construction, failure
//!   message resolution). No I/O, fully testable in isolation.
//! - **[`config`]**: Filesystem-backed gateway configuration.
//!
//! [`derive`] coordinates the core steps into the per-request pipeline the
//! web layer invokes.

pub mod config;
pub mod core;
pub mod derive;
