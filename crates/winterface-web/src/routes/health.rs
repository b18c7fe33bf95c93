//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Public health check endpoint.
///
/// Returns basic service health for supervisor probes. Node reachability is
/// deliberately not checked here: the admin UI is healthy even when the node
/// is not.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "winterface",
        version: env!("CARGO_PKG_VERSION"),
    })
}
