//! The trait the web layer talks to the node through.

use serde::Serialize;

use crate::bookmark::{Bookmark, NodeUri};
use crate::error::Result;

/// Summary the node reports about itself, shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct NodeStatus {
    /// Human-readable node name.
    pub name: String,

    /// Node software version string.
    pub version: String,

    /// Number of currently connected peers.
    pub connected_peers: u32,

    /// Seconds since the node started.
    pub uptime_secs: u64,

    /// Whether this is a development build of the node.
    pub dev_build: bool,
}

/// API surface through which the admin UI reads and mutates node state.
///
/// Every call is a single synchronous invocation with no retries; the node is
/// in-process or proxied by the implementor. Implementations must be safe to
/// share across request-handler tasks.
pub trait NodeInterface: Send + Sync {
    /// All bookmarks in tree order (parents before children, siblings in
    /// their node-owned order).
    fn bookmarks(&self) -> Result<Vec<Bookmark>>;

    /// Delete the bookmark at `path`.
    fn remove_bookmark(&self, path: &str) -> Result<()>;

    /// Move the bookmark at `path` one slot up among its siblings.
    ///
    /// `recursive` asks the node to carry contained bookmarks along when the
    /// path names a folder. Moving the first sibling up is a no-op.
    fn move_bookmark_up(&self, path: &str, recursive: bool) -> Result<()>;

    /// Move the bookmark at `path` one slot down among its siblings.
    ///
    /// Moving the last sibling down is a no-op.
    fn move_bookmark_down(&self, path: &str, recursive: bool) -> Result<()>;

    /// Replace the editable fields of the bookmark at `path`.
    #[allow(clippy::too_many_arguments)]
    fn edit_bookmark(
        &self,
        path: &str,
        name: &str,
        key: NodeUri,
        description: &str,
        explanation: &str,
        activelink: bool,
    ) -> Result<()>;

    /// Current node status for the dashboard.
    fn status(&self) -> Result<NodeStatus>;
}
