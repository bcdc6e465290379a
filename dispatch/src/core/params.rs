//! Incoming callback parameters read from the request query string.

use std::collections::HashMap;

/// The parameters of interest on the verification-redirect route.
///
/// Every key is optional; absence is a valid state, never an error. Values
/// arrive already URL-decoded and are kept verbatim. A present-but-empty
/// value stays `Some("")` here, since emptiness is judged at composition
/// and forwarding time, not during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub selector: Option<String>,
    pub validator: Option<String>,
    pub email: Option<String>,
}

impl CallbackParams {
    /// Pick the keys of interest out of a raw query-parameter mapping.
    pub fn from_map(query: &HashMap<String, String>) -> Self {
        Self {
            selector: query.get("selector").cloned(),
            validator: query.get("validator").cloned(),
            email: query.get("email").cloned(),
        }
    }
}
