//! Error types for bytecursor core operations.

use crate::kind::TextEncoding;
use thiserror::Error;

/// Core error type for region and cursor operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested offset/length range exceeds the backing storage.
    ///
    /// Raised by region construction, slicing and direct offset
    /// addressing. Never retried.
    #[error("range {offset}..{offset}+{len} out of bounds for region of {size} bytes")]
    OutOfBounds {
        /// Requested start offset.
        offset: usize,
        /// Requested length in bytes.
        len: usize,
        /// Region size in bytes.
        size: usize,
    },

    /// A cursor read or write would consume more bytes than remain.
    ///
    /// Raised before any byte or offset mutates, so the cursor can be
    /// inspected and the operation retried against a larger region.
    #[error("end of buffer: required {required} bytes, available {available} bytes")]
    EndOfBuffer {
        /// Bytes the operation needs.
        required: usize,
        /// Bytes remaining in the region.
        available: usize,
    },

    /// An unrecognized numeric kind tag was requested.
    #[error("\"{name}\" is not a valid numeric kind")]
    InvalidKind {
        /// The unrecognized tag.
        name: String,
    },

    /// Text bytes do not form a valid string in the requested encoding.
    #[error("invalid {encoding} text at offset {offset}")]
    InvalidText {
        /// Encoding that rejected the data.
        encoding: TextEncoding,
        /// Byte offset of the first offending byte.
        offset: usize,
    },
}

/// Result type alias for bytecursor core operations.
pub type Result<T> = std::result::Result<T, Error>;
