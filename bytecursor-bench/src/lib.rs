//! # bytecursor-bench
//!
//! Benchmarking utilities for bytecursor performance testing.

use bytecursor_core::{Cursor, NumericKind, Region};
use bytecursor_schema::Schema;

/// Builds a region pre-filled with `len` pseudo-random-ish bytes.
#[must_use]
pub fn patterned_region(len: usize) -> Region {
    let bytes: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
    Region::wrap(bytes)
}

/// A fixed schema used by the struct-decoding benchmarks: two scalars and
/// a nested pair, eight bytes per record.
#[must_use]
pub fn sample_schema() -> Schema {
    Schema::new()
        .field("seq", NumericKind::Uint32)
        .field("flag", NumericKind::Uint8)
        .nested(
            "pos",
            Schema::new()
                .field("x", NumericKind::Uint8)
                .field("y", NumericKind::Uint16),
        )
}

/// Decodes `count` consecutive records against [`sample_schema`].
pub fn decode_records(region: &Region, count: usize) -> usize {
    let schema = sample_schema();
    let mut cursor = Cursor::new(region.clone());
    let mut decoded = 0;
    for _ in 0..count {
        if schema.read(&mut cursor).is_err() {
            break;
        }
        decoded += 1;
    }
    decoded
}
