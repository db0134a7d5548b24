//! # bytecursor-core
//!
//! Cursor-addressed typed access to contiguous byte regions.
//!
//! This crate provides:
//! - [`Region`] - fixed-length byte storage with aliasing slices
//! - [`Cursor`] - independent read/write offsets over a region
//! - [`NumericKind`] / [`Value`] - the closed ten-kind numeric taxonomy
//! - [`codec`] - endianness-aware encode/decode with clamp-on-write
//! - Error types shared by every operation
//!
//! The core is synchronous and performs no I/O; file and compression
//! adapters live in `bytecursor-io`.

pub mod codec;
pub mod cursor;
pub mod error;
pub mod kind;
pub mod region;
pub mod value;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use kind::{ByteOrder, NumericKind, TextEncoding, ALL_KINDS};
pub use region::Region;
pub use value::Value;
