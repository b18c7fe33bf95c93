//! Ordered in-memory node, the default backend of the standalone binary.
//!
//! `MemoryNode` keeps bookmarks in a flat, ordered list; sibling order is the
//! list order restricted to entries with the same parent path. It implements
//! the full [`NodeInterface`] contract so the web layer can run (and be
//! tested) without a live peer-to-peer node behind it.

use std::time::Instant;

use parking_lot::RwLock;

use crate::bookmark::{Bookmark, NodeUri, parent_of};
use crate::error::{NodeError, Result};
use crate::interface::{NodeInterface, NodeStatus};

/// In-memory [`NodeInterface`] implementation.
pub struct MemoryNode {
    bookmarks: RwLock<Vec<Bookmark>>,
    name: String,
    started: Instant,
}

impl MemoryNode {
    /// Empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            bookmarks: RwLock::new(Vec::new()),
            name: name.into(),
            started: Instant::now(),
        }
    }

    /// Node pre-seeded with the given bookmarks, in the given sibling order.
    pub fn with_bookmarks(name: impl Into<String>, bookmarks: Vec<Bookmark>) -> Self {
        let node = Self::new(name);
        *node.bookmarks.write() = bookmarks;
        node
    }

    /// Index of the bookmark at `path`, or an error naming the path.
    fn index_of(entries: &[Bookmark], path: &str) -> Result<usize> {
        entries
            .iter()
            .position(|b| b.path == path)
            .ok_or_else(|| NodeError::UnknownBookmark {
                path: path.to_string(),
            })
    }

    /// Indices of all siblings of `path` (entries sharing its parent), in
    /// list order.
    fn sibling_indices(entries: &[Bookmark], path: &str) -> Vec<usize> {
        let parent = parent_of(path);
        entries
            .iter()
            .enumerate()
            .filter(|(_, b)| b.parent() == parent)
            .map(|(i, _)| i)
            .collect()
    }

    /// Swap `path` with the sibling `offset` positions away in sibling order.
    /// Out-of-range moves (first up, last down) are no-ops.
    fn shift(&self, path: &str, offset: i64) -> Result<()> {
        let mut entries = self.bookmarks.write();
        let idx = Self::index_of(&entries, path)?;
        let siblings = Self::sibling_indices(&entries, path);
        // idx is a sibling of itself, so the position lookup cannot fail
        let pos = siblings.iter().position(|&i| i == idx).unwrap_or(0);
        let target = pos as i64 + offset;
        if target < 0 || target as usize >= siblings.len() {
            tracing::debug!(path, offset, "move past end of sibling list ignored");
            return Ok(());
        }
        entries.swap(idx, siblings[target as usize]);
        Ok(())
    }
}

impl NodeInterface for MemoryNode {
    fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.read().clone())
    }

    fn remove_bookmark(&self, path: &str) -> Result<()> {
        let mut entries = self.bookmarks.write();
        let idx = Self::index_of(&entries, path)?;
        let removed = entries.remove(idx);
        tracing::info!(path = %removed.path, "bookmark removed");
        Ok(())
    }

    fn move_bookmark_up(&self, path: &str, recursive: bool) -> Result<()> {
        // Entries here are leaves, so `recursive` has nothing extra to carry.
        tracing::debug!(path, recursive, "moving bookmark up");
        self.shift(path, -1)
    }

    fn move_bookmark_down(&self, path: &str, recursive: bool) -> Result<()> {
        tracing::debug!(path, recursive, "moving bookmark down");
        self.shift(path, 1)
    }

    fn edit_bookmark(
        &self,
        path: &str,
        name: &str,
        key: NodeUri,
        description: &str,
        explanation: &str,
        activelink: bool,
    ) -> Result<()> {
        let mut entries = self.bookmarks.write();
        let idx = Self::index_of(&entries, path)?;
        let entry = &mut entries[idx];
        entry.name = name.to_string();
        entry.key = key;
        entry.description = description.to_string();
        entry.explanation = explanation.to_string();
        entry.activelink = activelink;
        tracing::info!(path, "bookmark edited");
        Ok(())
    }

    fn status(&self) -> Result<NodeStatus> {
        Ok(NodeStatus {
            name: self.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            connected_peers: 0,
            uptime_secs: self.started.elapsed().as_secs(),
            dev_build: cfg!(debug_assertions),
        })
    }
}
