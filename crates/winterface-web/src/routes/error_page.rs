//! Generic error page route and the 404 fallback.

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;

use crate::render;

/// `GET /error` — the generic error page clients are redirected to when a
/// request could not be processed.
pub async fn error_page() -> impl IntoResponse {
    render::error::error_page("Error", "The request could not be completed.")
}

/// Fallback for unmatched paths: the generic error page with a 404 status.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route matched");
    (
        StatusCode::NOT_FOUND,
        render::error::error_page("Page Not Found", "There is no page at this address."),
    )
}
