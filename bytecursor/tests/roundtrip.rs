//! End-to-end flows across the member crates.

use bytecursor::prelude::*;

/// Builds a little packet, decodes it with a schema, then round-trips the
/// region through compression and a JSON snapshot.
#[test]
fn packet_build_decode_compress_snapshot() {
    let region = Region::alloc(16);
    let mut writer = Cursor::new(region.clone());
    writer.write_u16(0xCAFE).unwrap();
    writer.write_u8(3).unwrap();
    writer.write_string("abc", TextEncoding::Ascii).unwrap();
    writer.write_f32(1.25).unwrap();

    let schema = Schema::new()
        .field("magic", NumericKind::Uint16)
        .custom("name", |cursor| {
            let len = cursor.read_u8()? as usize;
            Ok(DecodedValue::Text(
                cursor.read_string(len, TextEncoding::Ascii)?,
            ))
        })
        .field("scale", NumericKind::Float);

    let mut reader = Cursor::new(region.clone());
    let record = schema.read(&mut reader).unwrap();
    assert_eq!(
        record.get("magic").and_then(DecodedValue::as_number),
        Some(Value::U16(0xCAFE))
    );
    assert_eq!(record.get("name").and_then(DecodedValue::as_text), Some("abc"));
    assert_eq!(
        record.get("scale").and_then(DecodedValue::as_number),
        Some(Value::F32(1.25))
    );
    assert_eq!(reader.read_offset(), 10);
    assert_eq!(reader.remaining_read(), 6);

    let packed = compress(&region, Codec::Gzip).unwrap();
    let unpacked = decompress(&packed, Codec::Gzip).unwrap();
    assert_eq!(unpacked.to_vec(), region.to_vec());

    let json = Snapshot::capture(&region).to_json().unwrap();
    let restored = Snapshot::from_json(&json).unwrap().into_region().unwrap();
    assert_eq!(restored.to_vec(), region.to_vec());
}

/// A slice carved from a cursor patches the parent region in place.
#[test]
fn parse_then_patch_through_slice() {
    let region = Region::wrap(vec![0u8; 8]);
    let mut cursor = Cursor::new(region.clone());
    cursor.write_u16(0x0102).unwrap();

    let mut patch = cursor.slice(4).unwrap();
    patch.write_u32(0xAABB_CCDD).unwrap();
    cursor.write_u16(0x0304).unwrap();

    assert_eq!(
        region.to_vec(),
        vec![0x02, 0x01, 0xDD, 0xCC, 0xBB, 0xAA, 0x04, 0x03]
    );
}

/// Mixed-endianness cursors over one region see the same bytes.
#[test]
fn endianness_is_per_cursor() {
    let region = Region::alloc(2);
    Cursor::with_order(region.clone(), ByteOrder::BigEndian)
        .write_u16(0x0100)
        .unwrap();
    let mut le = Cursor::new(region);
    assert_eq!(le.read_u16().unwrap(), 0x0001);
}

#[test]
fn file_adapters_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "bytecursor-roundtrip-{}.bin",
        std::process::id()
    ));
    let region = Region::wrap(vec![1, 2, 3]);
    save(&path, &region).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded.to_vec(), vec![1, 2, 3]);
    std::fs::remove_file(&path).unwrap();
}
