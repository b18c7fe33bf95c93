//! Host allow-list admission control.
//!
//! Applied in front of the whole router: a request from a host that is not on
//! the configured allow-list is answered with the 403 error page and never
//! reaches a page handler or the static-asset service.

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::WinterfaceError;
use crate::state::AppState;

/// Middleware that admits requests by client host.
///
/// The client host is taken from the connection's peer address; matching
/// against the allow-list is exact string comparison, with `*` admitting
/// every host.
pub async fn require_allowed_host(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let host = addr.ip().to_string();
    if !host_allowed(&state.config.allowed_hosts, &host) {
        tracing::warn!(host = %host, path = %request.uri().path(), "rejected by host filter");
        return WinterfaceError::Forbidden.into_response_with(state.dev_mode);
    }
    next.run(request).await
}

/// Exact-match admission predicate. `*` in the list admits everything.
pub fn host_allowed(allowed: &HashSet<String>, host: &str) -> bool {
    allowed.contains("*") || allowed.contains(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list(hosts: &[&str]) -> HashSet<String> {
        hosts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn listed_host_is_admitted() {
        let allowed = allow_list(&["127.0.0.1", "::1"]);
        assert!(host_allowed(&allowed, "127.0.0.1"));
        assert!(host_allowed(&allowed, "::1"));
    }

    #[test]
    fn unlisted_host_is_rejected() {
        let allowed = allow_list(&["127.0.0.1"]);
        assert!(!host_allowed(&allowed, "10.0.0.7"));
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        let allowed = allow_list(&["10.0.0.1"]);
        assert!(!host_allowed(&allowed, "10.0.0.10"));
    }

    #[test]
    fn wildcard_admits_everything() {
        let allowed = allow_list(&["*"]);
        assert!(host_allowed(&allowed, "203.0.113.9"));
    }

    #[test]
    fn empty_list_rejects_everything() {
        let allowed = allow_list(&[]);
        assert!(!host_allowed(&allowed, "127.0.0.1"));
    }
}
