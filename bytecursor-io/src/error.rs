//! Error types for the io adapters.

use thiserror::Error;

/// Error type for file, compression and snapshot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure (file system or codec stream).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON could not be serialized or parsed.
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A snapshot carried a foreign kind tag.
    #[error("snapshot kind mismatch: expected \"{expected}\", found \"{found}\"")]
    SnapshotKind {
        /// The kind tag this library writes.
        expected: String,
        /// The kind tag found in the input.
        found: String,
    },
}

/// Result type alias for io adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_kind_display() {
        let err = Error::SnapshotKind {
            expected: "region".to_string(),
            found: "blob".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("region"));
        assert!(msg.contains("blob"));
    }

    #[test]
    fn test_io_error_wraps() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().contains("gone"));
    }
}
