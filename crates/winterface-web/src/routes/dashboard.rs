//! Dashboard page handler. Render only, no mutating actions; the template is
//! fixed at construction.

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::error::WinterfaceError;
use crate::render;
use crate::state::AppState;

/// `GET /dashboard` — render the node status summary.
pub async fn dashboard(State(state): State<AppState>) -> Response {
    match state.node.status() {
        Ok(status) => render::dashboard::dashboard_page(&status, chrono::Utc::now()).into_response(),
        Err(err) => WinterfaceError::Node(err).into_response_with(state.dev_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::http::StatusCode;

    use winterface_node::{Bookmark, MemoryNode, NodeError, NodeStatus};

    use crate::testing::{RecordingNode, body_text, test_state};

    fn memory_state() -> AppState {
        test_state(Arc::new(MemoryNode::new("dash-test")), false)
    }

    #[tokio::test]
    async fn dashboard_renders_node_name() {
        let response = dashboard(State(memory_state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("dash-test"));
    }

    #[tokio::test]
    async fn dashboard_ignores_bookmark_state() {
        // A node with bookmarks renders the same dashboard shape.
        let node = Arc::new(MemoryNode::with_bookmarks(
            "dash-test",
            vec![Bookmark {
                path: "a".to_string(),
                name: "a".to_string(),
                key: "CHK@k".parse().unwrap(),
                description: String::new(),
                explanation: String::new(),
                activelink: false,
            }],
        ));
        let response = dashboard(State(test_state(node, false))).await;
        assert!(body_text(response).await.contains("Connected peers"));
    }

    #[tokio::test]
    async fn status_failure_renders_error_page() {
        let node = Arc::new(RecordingNode::failing(NodeError::Unavailable(
            "status feed down".to_string(),
        )));
        let response = dashboard(State(test_state(node, false))).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(!body_text(response).await.contains("status feed down"));
    }

    #[test]
    fn status_type_is_serializable() {
        // The same status struct backs the JSON health surface.
        let status = NodeStatus {
            name: "n".to_string(),
            version: "v".to_string(),
            connected_peers: 1,
            uptime_secs: 2,
            dev_build: false,
        };
        assert!(serde_json::to_string(&status).is_ok());
    }
}
