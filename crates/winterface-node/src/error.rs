//! Error types for node-interface operations.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, NodeError>;

/// Errors reported by a node when the admin UI reads or mutates its state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The given bookmark path does not exist on the node.
    #[error("unknown bookmark: {path}")]
    UnknownBookmark {
        /// The slash-delimited path that failed to resolve.
        path: String,
    },

    /// A bookmark key failed to parse as a node resource locator.
    #[error("invalid node URI: {0}")]
    InvalidUri(String),

    /// The node could not service the request (not connected, shutting down).
    #[error("node unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_bookmark_display() {
        let err = NodeError::UnknownBookmark {
            path: "folder/sub".to_string(),
        };
        assert_eq!(err.to_string(), "unknown bookmark: folder/sub");
    }

    #[test]
    fn invalid_uri_display() {
        let err = NodeError::InvalidUri("empty key".to_string());
        assert!(err.to_string().contains("invalid node URI"));
    }

    #[test]
    fn unavailable_display() {
        let err = NodeError::Unavailable("not connected".to_string());
        assert!(err.to_string().contains("node unavailable"));
    }
}
