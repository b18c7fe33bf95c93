//! Page rendering with maud (compile-time templates).
//!
//! Shared chrome and CSS live in [`components`]; each page gets its own
//! module. Dynamic content is HTML-escaped by maud.

pub mod bookmarks;
pub mod components;
pub mod dashboard;
pub mod error;
