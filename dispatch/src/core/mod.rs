//! Pure, deterministic derivation logic.
//!
//! Nothing in this module performs I/O or can fail: every input shape
//! (present, partial, absent) maps to a defined output value.

pub mod environment;
pub mod failure;
pub mod params;
pub mod target;
pub mod token;
