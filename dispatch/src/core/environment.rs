//! Deployment-context classification from the request host.

/// Host names classified as local development.
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Where the current request is being served from, derived solely from the
/// host name. Fixed for the lifetime of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Remote,
}

impl Environment {
    /// Classify a bare host name (no port). Exact, case-sensitive match.
    pub fn from_host_name(name: &str) -> Self {
        if LOCAL_HOSTS.contains(&name) {
            Self::Local
        } else {
            Self::Remote
        }
    }
}

/// Strip an optional `:port` suffix from a `Host` header value.
///
/// A bracketed IPv6 literal keeps its brackets, so it never matches the
/// local host set.
pub fn host_name(host_header: &str) -> &str {
    if host_header.starts_with('[') {
        match host_header.find(']') {
            Some(end) => &host_header[..=end],
            None => host_header,
        }
    } else {
        host_header
            .split_once(':')
            .map_or(host_header, |(name, _port)| name)
    }
}
