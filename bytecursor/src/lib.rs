//! # bytecursor
//!
//! A typed binary-buffer codec: cursor-addressed views over contiguous
//! byte regions, with endianness-aware reads and writes of ten fixed-width
//! numeric kinds, byte strings, arrays, and schema-driven decoding of
//! nested records.
//!
//! ## Features
//!
//! - **Independent offsets** - each cursor tracks a read and a write
//!   position separately, so parse-then-patch workflows need one cursor
//! - **Bounds-safe** - every operation validates its full range before
//!   mutating anything; failures leave cursor and region untouched
//! - **Clamp-on-write** - out-of-range numeric writes saturate to the
//!   nearest representable bound instead of wrapping or failing
//! - **Aliasing slices** - wraps and slices share storage by design, so a
//!   patch through one view is visible through every other
//! - **Schema decoding** - declarative field layouts with nested records
//!   and custom decode functions
//!
//! ## Quick Start
//!
//! ```
//! use bytecursor::prelude::*;
//!
//! let region = Region::alloc(8);
//! let mut cursor = Cursor::new(region.clone());
//! cursor.write_u16(1).unwrap();
//! cursor.write_u8(7).unwrap();
//! cursor.write_u8(9).unwrap();
//!
//! let schema = Schema::new()
//!     .field("a", NumericKind::Uint16)
//!     .nested(
//!         "b",
//!         Schema::new()
//!             .field("x", NumericKind::Uint8)
//!             .field("y", NumericKind::Uint8),
//!     );
//! let record = schema.read(&mut Cursor::new(region)).unwrap();
//! assert_eq!(
//!     record.get("a").and_then(DecodedValue::as_number),
//!     Some(Value::U16(1))
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - regions, cursors, numeric kinds and the codec table
//! - [`schema`] - record schemas and the recursive struct decoder
//! - [`io`] - file, compression and snapshot adapters

pub mod prelude;

/// Regions, cursors and the numeric codec.
pub mod core {
    pub use bytecursor_core::*;
}

/// Record schemas and struct decoding.
pub mod schema {
    pub use bytecursor_schema::*;
}

/// File, compression and snapshot adapters.
pub mod io {
    pub use bytecursor_io::*;
}
