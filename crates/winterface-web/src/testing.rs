//! Shared test doubles and fixtures for the crate's unit tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use parking_lot::Mutex;

use winterface_node::{Bookmark, NodeError, NodeInterface, NodeStatus, NodeUri};

use crate::config::Config;
use crate::state::AppState;

/// Every node call a handler makes, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Remove(String),
    MoveUp(String, bool),
    MoveDown(String, bool),
    Edit {
        path: String,
        name: String,
        key: String,
        description: String,
        explanation: String,
        activelink: bool,
    },
    Status,
}

/// Node double that records every call. With `fail_with` set, calls are still
/// recorded but all return that error.
#[derive(Default)]
pub(crate) struct RecordingNode {
    pub(crate) calls: Mutex<Vec<Call>>,
    pub(crate) fail_with: Option<NodeError>,
}

impl RecordingNode {
    /// Double whose every call fails with `err`.
    pub(crate) fn failing(err: NodeError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    fn outcome(&self) -> winterface_node::Result<()> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl NodeInterface for RecordingNode {
    fn bookmarks(&self) -> winterface_node::Result<Vec<Bookmark>> {
        self.calls.lock().push(Call::List);
        self.outcome().map(|()| Vec::new())
    }

    fn remove_bookmark(&self, path: &str) -> winterface_node::Result<()> {
        self.calls.lock().push(Call::Remove(path.to_string()));
        self.outcome()
    }

    fn move_bookmark_up(&self, path: &str, recursive: bool) -> winterface_node::Result<()> {
        self.calls
            .lock()
            .push(Call::MoveUp(path.to_string(), recursive));
        self.outcome()
    }

    fn move_bookmark_down(&self, path: &str, recursive: bool) -> winterface_node::Result<()> {
        self.calls
            .lock()
            .push(Call::MoveDown(path.to_string(), recursive));
        self.outcome()
    }

    fn edit_bookmark(
        &self,
        path: &str,
        name: &str,
        key: NodeUri,
        description: &str,
        explanation: &str,
        activelink: bool,
    ) -> winterface_node::Result<()> {
        self.calls.lock().push(Call::Edit {
            path: path.to_string(),
            name: name.to_string(),
            key: key.as_str().to_string(),
            description: description.to_string(),
            explanation: explanation.to_string(),
            activelink,
        });
        self.outcome()
    }

    fn status(&self) -> winterface_node::Result<NodeStatus> {
        self.calls.lock().push(Call::Status);
        self.outcome().map(|()| NodeStatus {
            name: "recording".to_string(),
            version: "0".to_string(),
            connected_peers: 0,
            uptime_secs: 0,
            dev_build: false,
        })
    }
}

/// Config bound to loopback on an ephemeral port.
pub(crate) fn test_config(allowed: &[&str]) -> Config {
    Config {
        bind_hosts: vec!["127.0.0.1".to_string()],
        port: 0,
        idle_timeout: Duration::from_secs(30),
        allowed_hosts: Arc::new(allowed.iter().map(|s| s.to_string()).collect::<HashSet<_>>()),
        static_dir: "static".to_string(),
    }
}

/// State over the given node, loopback-only allow-list.
pub(crate) fn test_state(node: Arc<dyn NodeInterface>, dev_mode: bool) -> AppState {
    AppState::new(test_config(&["127.0.0.1"]), node, dev_mode)
}

/// Collect a response body as text.
pub(crate) async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
