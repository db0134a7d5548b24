//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use bytecursor::prelude::*;
//!
//! let mut cursor = Cursor::new(Region::alloc(4));
//! cursor.write_u16(7).unwrap();
//! ```

// Core types
pub use bytecursor_core::codec::{decode_at, encode_at, KindCodec};
pub use bytecursor_core::error::{Error as CoreError, Result as CoreResult};
pub use bytecursor_core::{ByteOrder, Cursor, NumericKind, Region, TextEncoding, Value};

// Schema types
pub use bytecursor_schema::{read_struct, DecodedValue, FieldSpec, Record, Schema};

// IO adapters
pub use bytecursor_io::error::{Error as IoError, Result as IoResult};
pub use bytecursor_io::{compress, decompress, load, load_async, save, save_async};
pub use bytecursor_io::{Codec, Snapshot};
