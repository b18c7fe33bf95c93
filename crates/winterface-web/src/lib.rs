//! Winterface - web administration interface for a peer-to-peer node.
//!
//! This crate provides a small embedded HTTP server that renders dashboard and
//! bookmark-management pages for a running node and forwards bookmark
//! mutations (reorder, edit, delete) to the node's API. It is a thin
//! presentation layer: all durable state lives in the node behind the
//! [`winterface_node::NodeInterface`] seam.
//!
//! # Architecture
//!
//! - **Server manager**: owns the listener lifecycle — one socket per
//!   configured bind host, graceful shutdown, idempotent start
//! - **Access filter**: admits requests by client host against an allow-list
//!   before any routing happens
//! - **Routes**: per-page handlers (bookmarks, dashboard, error, health) plus
//!   a static-asset passthrough
//! - **Render**: maud (compile-time templates) page rendering with shared
//!   chrome in `render::components`
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Mutating bookmark actions answer with a redirect that strips the action
//!   from the visible URL, so a refresh never replays the action
//! - Requests from hosts outside the allow-list receive a 403 error page and
//!   never reach a page handler

pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use routes::router;
pub use server::{ServerError, ServerHandle, ServerManager};
pub use state::AppState;
