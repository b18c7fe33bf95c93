//! Error types for the web layer.
//!
//! Errors are rendered as HTML error pages rather than JSON, since this is a
//! user-facing HTML service. The same renderer backs the standalone `/error`
//! route and the 404 fallback.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use winterface_node::NodeError;

use crate::render;

/// Web layer error type.
#[derive(Debug, thiserror::Error)]
pub enum WinterfaceError {
    /// The client host is not on the allow-list.
    #[error("forbidden")]
    Forbidden,

    /// The `action` query parameter named no known bookmark action.
    #[error("unknown bookmark action: {0}")]
    UnknownAction(String),

    /// The node rejected or could not service a call.
    #[error("node error: {0}")]
    Node(#[from] NodeError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl WinterfaceError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UnknownAction(_) => StatusCode::BAD_REQUEST,
            Self::Node(NodeError::UnknownBookmark { .. }) => StatusCode::NOT_FOUND,
            Self::Node(NodeError::InvalidUri(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Node(NodeError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl WinterfaceError {
    /// Render this error as an error-page response.
    ///
    /// In dev mode the page carries the underlying error text; production
    /// pages keep the generic message only.
    pub fn into_response_with(self, dev_mode: bool) -> Response {
        let status = self.status();
        let (title, message) = match &self {
            Self::Forbidden => (
                "Access Denied",
                "Your host is not allowed to use this interface.".to_string(),
            ),
            Self::UnknownAction(action) => (
                "Unknown Action",
                format!("The requested bookmark action is not recognized: {action}"),
            ),
            Self::Node(NodeError::UnknownBookmark { path }) => (
                "Bookmark Not Found",
                format!("No bookmark exists at the path: {path}"),
            ),
            Self::Node(err) => {
                tracing::error!(error = %err, "node call failed");
                (
                    "Node Error",
                    "The node could not complete the request. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let detail = dev_mode.then(|| self.to_string());
        (
            status,
            render::error::error_page_with_detail(title, &message, detail.as_deref()),
        )
            .into_response()
    }
}

impl IntoResponse for WinterfaceError {
    fn into_response(self) -> Response {
        self.into_response_with(false)
    }
}
