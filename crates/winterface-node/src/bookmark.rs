//! Bookmark data model.
//!
//! A bookmark is a named, ordered reference to a resource on the peer-to-peer
//! network. Its identity is a slash-delimited path (`folder/sub`); siblings
//! share a parent prefix and their relative order is significant (the UI
//! exposes move-up/move-down controls). Ordering is owned by the node, not by
//! the web layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// A resource locator understood by the node (e.g. a content key).
///
/// This layer does not interpret the key beyond a shape check: non-empty and
/// free of whitespace and control characters. Full key semantics belong to the
/// node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeUri(String);

impl NodeUri {
    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NodeUri {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NodeError::InvalidUri("empty key".to_string()));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(NodeError::InvalidUri(format!(
                "key contains whitespace or control characters: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for NodeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bookmark as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Slash-delimited path identifying this bookmark within the tree.
    pub path: String,

    /// Display name.
    pub name: String,

    /// Target resource locator.
    pub key: NodeUri,

    /// Short description shown in listings.
    pub description: String,

    /// Longer explanatory text.
    pub explanation: String,

    /// Whether the bookmark target advertises an activelink image.
    pub activelink: bool,
}

impl Bookmark {
    /// Parent path of this bookmark, or `""` for top-level bookmarks.
    pub fn parent(&self) -> &str {
        parent_of(&self.path)
    }
}

/// Parent component of a slash-delimited path (`folder/sub` -> `folder`).
pub(crate) fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
