//! Callback gateway server for the booking front-end.
//!
//! Terminates the external callback routes: the email-verification redirect
//! and the payment-failure display. Everything else on the site is static
//! and served from a fallback directory.

pub mod routes;
pub mod state;
pub mod views;

#[cfg(test)]
mod tests;
