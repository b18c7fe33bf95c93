//! Route definitions for the admin interface.
//!
//! ## Routes
//!
//! - `GET /` - Redirect to the dashboard
//! - `GET /dashboard` - Node status page
//! - `GET /bookmarks` - Bookmark list + reorder/delete actions
//! - `POST /bookmarks` - Bookmark edit submissions
//! - `GET /error` - Generic error page
//! - `GET /health` - Health check (JSON)
//! - `GET /static/*` - Static asset passthrough
//!
//! Unmatched paths render the generic error page with a 404; together with
//! the access filter's 403 this covers the error-page mapping. The host
//! filter wraps every route, static assets included.

pub mod bookmarks;
pub mod dashboard;
pub mod error_page;
pub mod health;

use axum::Router;
use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::filter;
use crate::state::AppState;

/// Build the complete admin interface router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/bookmarks",
            get(bookmarks::bookmarks_get).post(bookmarks::bookmarks_post),
        )
        .route("/error", get(error_page::error_page))
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(error_page::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            filter::require_allowed_host,
        ))
        .with_state(state)
}
