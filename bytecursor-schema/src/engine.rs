//! The recursive struct decoder.

use crate::record::{DecodedValue, Record};
use crate::schema::{FieldSpec, Schema};
use bytecursor_core::{Cursor, Result};

/// Decodes one record from the cursor's current read position.
///
/// Fields are consumed in declaration order: primitives through the
/// cursor's tag-dispatched read, nested schemas recursively, custom
/// decoders by invocation. Total consumption is exactly the sum of what
/// each field consumed. A schema that over-reads the region surfaces as
/// [`bytecursor_core::Error::EndOfBuffer`] from the failing field; bytes
/// left unread afterwards are not an error and can be measured with
/// [`Cursor::remaining_read`].
pub fn read_struct(cursor: &mut Cursor, schema: &Schema) -> Result<Record> {
    let mut record = Record::with_capacity(schema.len());
    for (name, spec) in schema.iter() {
        let value = match spec {
            FieldSpec::Primitive(kind) => DecodedValue::Number(cursor.read_value(*kind)?),
            FieldSpec::Nested(nested) => DecodedValue::Record(read_struct(cursor, nested)?),
            FieldSpec::Custom(decoder) => decoder(cursor)?,
        };
        record.push(name.to_string(), value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytecursor_core::{ByteOrder, Error, NumericKind, Region, TextEncoding, Value};

    #[test]
    fn test_flat_struct_little_endian() {
        let schema = Schema::new()
            .field("a", NumericKind::Uint16)
            .nested(
                "b",
                Schema::new()
                    .field("x", NumericKind::Uint8)
                    .field("y", NumericKind::Uint8),
            );
        let mut cursor = Cursor::new(Region::wrap(vec![0x01, 0x00, 0x07, 0x09]));

        let record = read_struct(&mut cursor, &schema).unwrap();

        assert_eq!(
            record.get("a").and_then(DecodedValue::as_number),
            Some(Value::U16(1))
        );
        let b = record.get("b").and_then(DecodedValue::as_record).unwrap();
        assert_eq!(b.get("x").and_then(DecodedValue::as_number), Some(Value::U8(7)));
        assert_eq!(b.get("y").and_then(DecodedValue::as_number), Some(Value::U8(9)));
        assert_eq!(cursor.read_offset(), 4);
        assert_eq!(cursor.remaining_read(), 0);
    }

    #[test]
    fn test_field_order_is_byte_order() {
        let schema = Schema::new()
            .field("first", NumericKind::Uint8)
            .field("second", NumericKind::Uint8);
        let mut cursor = Cursor::new(Region::wrap(vec![10, 20]));

        let record = read_struct(&mut cursor, &schema).unwrap();
        let decoded: Vec<(&str, Value)> = record
            .iter()
            .map(|(name, value)| (name, value.as_number().unwrap()))
            .collect();
        assert_eq!(
            decoded,
            vec![("first", Value::U8(10)), ("second", Value::U8(20))]
        );
    }

    #[test]
    fn test_big_endian_struct() {
        let schema = Schema::new().field("n", NumericKind::Uint16);
        let mut cursor =
            Cursor::with_order(Region::wrap(vec![0x01, 0x00]), ByteOrder::BigEndian);
        let record = read_struct(&mut cursor, &schema).unwrap();
        assert_eq!(
            record.get("n").and_then(DecodedValue::as_number),
            Some(Value::U16(256))
        );
    }

    #[test]
    fn test_custom_decoder_length_prefixed_string() {
        // A u16 length prefix followed by that many bytes of text.
        let schema = Schema::new().custom("name", |cursor| {
            let len = cursor.read_u16()? as usize;
            Ok(DecodedValue::Text(
                cursor.read_string(len, TextEncoding::Ascii)?,
            ))
        });

        let region = Region::alloc(7);
        let mut writer = Cursor::new(region.clone());
        writer.write_u16(5).unwrap();
        writer.write_string("hello", TextEncoding::Ascii).unwrap();

        let mut cursor = Cursor::new(region);
        let record = read_struct(&mut cursor, &schema).unwrap();
        assert_eq!(
            record.get("name").and_then(DecodedValue::as_text),
            Some("hello")
        );
        assert_eq!(cursor.read_offset(), 7);
    }

    #[test]
    fn test_deeply_nested_schemas() {
        let inner = Schema::new().field("leaf", NumericKind::Int8);
        let mid = Schema::new().nested("inner", inner);
        let outer = Schema::new()
            .nested("mid", mid)
            .field("tail", NumericKind::Uint8);

        let mut cursor = Cursor::new(Region::wrap(vec![0xFF, 0x2A]));
        let record = read_struct(&mut cursor, &outer).unwrap();

        let leaf = record
            .get("mid")
            .and_then(DecodedValue::as_record)
            .and_then(|mid| mid.get("inner"))
            .and_then(DecodedValue::as_record)
            .and_then(|inner| inner.get("leaf"))
            .and_then(DecodedValue::as_number);
        assert_eq!(leaf, Some(Value::I8(-1)));
        assert_eq!(
            record.get("tail").and_then(DecodedValue::as_number),
            Some(Value::U8(42))
        );
    }

    #[test]
    fn test_over_reading_schema_surfaces_end_of_buffer() {
        let schema = Schema::new()
            .field("a", NumericKind::Uint32)
            .field("b", NumericKind::Uint32);
        let mut cursor = Cursor::new(Region::wrap(vec![0u8; 6]));

        let err = read_struct(&mut cursor, &schema).unwrap_err();
        assert_eq!(
            err,
            Error::EndOfBuffer {
                required: 4,
                available: 2,
            }
        );
        // Field "a" was consumed before the failure.
        assert_eq!(cursor.read_offset(), 4);
    }

    #[test]
    fn test_under_reading_schema_leaves_remainder() {
        let schema = Schema::new().field("a", NumericKind::Uint8);
        let mut cursor = Cursor::new(Region::wrap(vec![1, 2, 3]));
        read_struct(&mut cursor, &schema).unwrap();
        assert_eq!(cursor.remaining_read(), 2);
    }

    #[test]
    fn test_empty_schema_consumes_nothing() {
        let mut cursor = Cursor::new(Region::wrap(vec![1, 2]));
        let record = read_struct(&mut cursor, &Schema::new()).unwrap();
        assert!(record.is_empty());
        assert_eq!(cursor.read_offset(), 0);
    }

    #[test]
    fn test_custom_decoder_error_propagates() {
        let schema = Schema::new().custom("broken", |cursor| {
            cursor.read_u64()?;
            Ok(DecodedValue::Bytes(Vec::new()))
        });
        let mut cursor = Cursor::new(Region::wrap(vec![0u8; 2]));
        let err = read_struct(&mut cursor, &schema).unwrap_err();
        assert!(matches!(err, Error::EndOfBuffer { .. }));
    }

    #[test]
    fn test_schema_read_method_matches_free_function() {
        let schema = Schema::new().field("v", NumericKind::Uint8);
        let mut a = Cursor::new(Region::wrap(vec![9]));
        let mut b = Cursor::new(Region::wrap(vec![9]));
        assert_eq!(schema.read(&mut a).unwrap(), read_struct(&mut b, &schema).unwrap());
    }
}
