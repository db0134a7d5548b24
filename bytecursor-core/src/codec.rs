//! Endianness-aware encode/decode of the ten numeric kinds.
//!
//! Dispatch is a static table of `{width, decode, encode}` triples indexed
//! by [`NumericKind`], so the kind set stays exhaustively checkable at
//! compile time and tag-driven callers pay one indexed load instead of a
//! branch ladder. Encoding clamps out-of-range values into the target
//! kind's representable range; it never fails on magnitude.

use crate::error::Result;
use crate::kind::{ByteOrder, NumericKind};
use crate::region::Region;
use crate::value::Value;

/// Codec entry for one numeric kind.
pub struct KindCodec {
    /// Encoded width in bytes.
    pub width: usize,
    /// Decodes exactly `width` bytes into a value.
    pub decode: fn(&[u8], ByteOrder) -> Value,
    /// Clamps `value` into the kind's range and encodes it into
    /// exactly `width` bytes.
    pub encode: fn(&mut [u8], Value, ByteOrder),
}

fn decode_i8(bytes: &[u8], _order: ByteOrder) -> Value {
    Value::I8(bytes[0] as i8)
}

fn decode_u8(bytes: &[u8], _order: ByteOrder) -> Value {
    Value::U8(bytes[0])
}

fn decode_i16(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = [bytes[0], bytes[1]];
    Value::I16(if order.is_little() {
        i16::from_le_bytes(raw)
    } else {
        i16::from_be_bytes(raw)
    })
}

fn decode_u16(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = [bytes[0], bytes[1]];
    Value::U16(if order.is_little() {
        u16::from_le_bytes(raw)
    } else {
        u16::from_be_bytes(raw)
    })
}

fn decode_i32(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::I32(if order.is_little() {
        i32::from_le_bytes(raw)
    } else {
        i32::from_be_bytes(raw)
    })
}

fn decode_u32(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::U32(if order.is_little() {
        u32::from_le_bytes(raw)
    } else {
        u32::from_be_bytes(raw)
    })
}

fn decode_i64(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::I64(if order.is_little() {
        i64::from_le_bytes(raw)
    } else {
        i64::from_be_bytes(raw)
    })
}

fn decode_u64(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::U64(if order.is_little() {
        u64::from_le_bytes(raw)
    } else {
        u64::from_be_bytes(raw)
    })
}

fn decode_f32(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::F32(if order.is_little() {
        f32::from_le_bytes(raw)
    } else {
        f32::from_be_bytes(raw)
    })
}

fn decode_f64(bytes: &[u8], order: ByteOrder) -> Value {
    let raw = bytes.try_into().unwrap();
    Value::F64(if order.is_little() {
        f64::from_le_bytes(raw)
    } else {
        f64::from_be_bytes(raw)
    })
}

fn encode_i8(out: &mut [u8], value: Value, _order: ByteOrder) {
    let Value::I8(v) = value.clamp_to(NumericKind::Int8) else {
        unreachable!("clamp_to yields the requested kind")
    };
    out[0] = v as u8;
}

fn encode_u8(out: &mut [u8], value: Value, _order: ByteOrder) {
    let Value::U8(v) = value.clamp_to(NumericKind::Uint8) else {
        unreachable!("clamp_to yields the requested kind")
    };
    out[0] = v;
}

fn encode_i16(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::I16(v) = value.clamp_to(NumericKind::Int16) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..2].copy_from_slice(&bytes);
}

fn encode_u16(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::U16(v) = value.clamp_to(NumericKind::Uint16) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..2].copy_from_slice(&bytes);
}

fn encode_i32(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::I32(v) = value.clamp_to(NumericKind::Int32) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..4].copy_from_slice(&bytes);
}

fn encode_u32(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::U32(v) = value.clamp_to(NumericKind::Uint32) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..4].copy_from_slice(&bytes);
}

fn encode_i64(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::I64(v) = value.clamp_to(NumericKind::Int64) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..8].copy_from_slice(&bytes);
}

fn encode_u64(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::U64(v) = value.clamp_to(NumericKind::Uint64) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..8].copy_from_slice(&bytes);
}

fn encode_f32(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::F32(v) = value.clamp_to(NumericKind::Float) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..4].copy_from_slice(&bytes);
}

fn encode_f64(out: &mut [u8], value: Value, order: ByteOrder) {
    let Value::F64(v) = value.clamp_to(NumericKind::Double) else {
        unreachable!("clamp_to yields the requested kind")
    };
    let bytes = if order.is_little() {
        v.to_le_bytes()
    } else {
        v.to_be_bytes()
    };
    out[..8].copy_from_slice(&bytes);
}

/// Dispatch table, one entry per kind in [`NumericKind`] declaration order.
static CODECS: [KindCodec; 10] = [
    KindCodec {
        width: 1,
        decode: decode_i8,
        encode: encode_i8,
    },
    KindCodec {
        width: 1,
        decode: decode_u8,
        encode: encode_u8,
    },
    KindCodec {
        width: 2,
        decode: decode_i16,
        encode: encode_i16,
    },
    KindCodec {
        width: 2,
        decode: decode_u16,
        encode: encode_u16,
    },
    KindCodec {
        width: 4,
        decode: decode_i32,
        encode: encode_i32,
    },
    KindCodec {
        width: 4,
        decode: decode_u32,
        encode: encode_u32,
    },
    KindCodec {
        width: 8,
        decode: decode_i64,
        encode: encode_i64,
    },
    KindCodec {
        width: 8,
        decode: decode_u64,
        encode: encode_u64,
    },
    KindCodec {
        width: 4,
        decode: decode_f32,
        encode: encode_f32,
    },
    KindCodec {
        width: 8,
        decode: decode_f64,
        encode: encode_f64,
    },
];

impl NumericKind {
    /// Returns the codec entry for this kind.
    #[must_use]
    pub fn codec(self) -> &'static KindCodec {
        &CODECS[self as usize]
    }
}

/// Decodes a value of `kind` at `offset` in `region`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + kind.width()` exceeds
/// the region.
pub fn decode_at(
    region: &Region,
    offset: usize,
    kind: NumericKind,
    order: ByteOrder,
) -> Result<Value> {
    let width = kind.width();
    let mut buf = [0u8; 8];
    region.read_at(offset, &mut buf[..width])?;
    Ok((kind.codec().decode)(&buf[..width], order))
}

/// Encodes `value` as `kind` at `offset` in `region`, clamping first.
///
/// The bytes are assembled before the bounds-checked store, so a failed
/// encode leaves the region untouched.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + kind.width()` exceeds
/// the region.
pub fn encode_at(
    region: &Region,
    offset: usize,
    kind: NumericKind,
    value: Value,
    order: ByteOrder,
) -> Result<()> {
    let width = kind.width();
    let mut buf = [0u8; 8];
    (kind.codec().encode)(&mut buf[..width], value, order);
    region.write_at(offset, &buf[..width])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kind::ALL_KINDS;

    #[test]
    fn test_table_widths_match_kinds() {
        for kind in ALL_KINDS {
            assert_eq!(kind.codec().width, kind.width(), "width of {kind}");
        }
    }

    #[test]
    fn test_round_trip_every_kind_both_orders() {
        let samples = [
            (NumericKind::Int8, Value::I8(-100)),
            (NumericKind::Uint8, Value::U8(200)),
            (NumericKind::Int16, Value::I16(-30_000)),
            (NumericKind::Uint16, Value::U16(60_000)),
            (NumericKind::Int32, Value::I32(-2_000_000_000)),
            (NumericKind::Uint32, Value::U32(4_000_000_000)),
            (NumericKind::Int64, Value::I64(i64::MIN + 1)),
            (NumericKind::Uint64, Value::U64(u64::MAX - 1)),
            (NumericKind::Float, Value::F32(std::f32::consts::PI)),
            (NumericKind::Double, Value::F64(std::f64::consts::E)),
        ];
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            for (kind, value) in samples {
                let region = Region::alloc(8);
                encode_at(&region, 0, kind, value, order).unwrap();
                let back = decode_at(&region, 0, kind, order).unwrap();
                assert_eq!(back, value, "{kind} round-trip with {order:?}");
            }
        }
    }

    #[test]
    fn test_little_endian_layout() {
        let region = Region::alloc(4);
        encode_at(
            &region,
            0,
            NumericKind::Uint32,
            Value::U32(0x1234_5678),
            ByteOrder::LittleEndian,
        )
        .unwrap();
        assert_eq!(region.to_vec(), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_big_endian_layout() {
        let region = Region::alloc(4);
        encode_at(
            &region,
            0,
            NumericKind::Uint32,
            Value::U32(0x1234_5678),
            ByteOrder::BigEndian,
        )
        .unwrap();
        assert_eq!(region.to_vec(), vec![0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_endianness_only_reorders_bytes() {
        let le = Region::alloc(2);
        let be = Region::alloc(2);
        encode_at(&le, 0, NumericKind::Uint16, Value::U16(0xABCD), ByteOrder::LittleEndian)
            .unwrap();
        encode_at(&be, 0, NumericKind::Uint16, Value::U16(0xABCD), ByteOrder::BigEndian).unwrap();
        let mut le_bytes = le.to_vec();
        le_bytes.reverse();
        assert_eq!(le_bytes, be.to_vec());
    }

    #[test]
    fn test_encode_clamps_above_range() {
        let region = Region::alloc(1);
        encode_at(
            &region,
            0,
            NumericKind::Uint8,
            Value::I64(300),
            ByteOrder::LittleEndian,
        )
        .unwrap();
        assert_eq!(
            decode_at(&region, 0, NumericKind::Uint8, ByteOrder::LittleEndian).unwrap(),
            Value::U8(255)
        );
    }

    #[test]
    fn test_encode_clamps_below_range() {
        let region = Region::alloc(2);
        encode_at(
            &region,
            0,
            NumericKind::Int16,
            Value::I64(-1_000_000),
            ByteOrder::LittleEndian,
        )
        .unwrap();
        assert_eq!(
            decode_at(&region, 0, NumericKind::Int16, ByteOrder::LittleEndian).unwrap(),
            Value::I16(i16::MIN)
        );
    }

    #[test]
    fn test_clamped_write_is_bound_not_wrapped() {
        // 256 would wrap to 0; clamping must produce 255 instead.
        let region = Region::alloc(1);
        encode_at(
            &region,
            0,
            NumericKind::Uint8,
            Value::U16(256),
            ByteOrder::LittleEndian,
        )
        .unwrap();
        assert_eq!(region.to_vec(), vec![0xFF]);
    }

    #[test]
    fn test_one_byte_kinds_ignore_order() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let region = Region::alloc(1);
            encode_at(&region, 0, NumericKind::Int8, Value::I8(-5), order).unwrap();
            assert_eq!(
                decode_at(&region, 0, NumericKind::Int8, order).unwrap(),
                Value::I8(-5)
            );
        }
    }

    #[test]
    fn test_decode_past_end_is_out_of_bounds() {
        let region = Region::alloc(3);
        let err = decode_at(&region, 0, NumericKind::Uint32, ByteOrder::LittleEndian).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn test_encode_past_end_leaves_region_untouched() {
        let region = Region::wrap(vec![7u8; 3]);
        let err = encode_at(
            &region,
            1,
            NumericKind::Uint32,
            Value::U32(0),
            ByteOrder::LittleEndian,
        )
        .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_eq!(region.to_vec(), vec![7u8; 3]);
    }

    #[test]
    fn test_double_round_trips_full_u64_integers_lossily() {
        // 64-bit integers go through their own wide domain, not f64.
        let region = Region::alloc(8);
        let exact = Value::U64((1u64 << 53) + 1);
        encode_at(&region, 0, NumericKind::Uint64, exact, ByteOrder::LittleEndian).unwrap();
        assert_eq!(
            decode_at(&region, 0, NumericKind::Uint64, ByteOrder::LittleEndian).unwrap(),
            exact
        );
    }
}
