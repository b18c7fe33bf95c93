//! Node-interface contract for the winterface administration UI.
//!
//! The admin UI is a thin presentation layer over a running peer-to-peer node.
//! All durable state (bookmarks, their sibling ordering, node status) lives in
//! the node; this crate defines the seam the web layer talks through:
//!
//! - [`Bookmark`] and [`NodeUri`] — the bookmark data model
//! - [`NodeStatus`] — the dashboard summary the node reports about itself
//! - [`NodeInterface`] — the trait the web layer is injected with
//! - [`MemoryNode`] — an ordered in-memory implementation, used as the default
//!   backend of the standalone binary and as the workhorse of the test suite
//!
//! The real node implements [`NodeInterface`] out of tree.

mod bookmark;
mod error;
mod interface;
mod memory;

pub use bookmark::{Bookmark, NodeUri};
pub use error::{NodeError, Result};
pub use interface::{NodeInterface, NodeStatus};
pub use memory::MemoryNode;
