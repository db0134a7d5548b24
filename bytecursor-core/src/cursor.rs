//! Cursors: a region plus independent read and write offsets.
//!
//! Every read advances the read offset and every write advances the write
//! offset by the consumed width; the two never interact, so a cursor can
//! parse one part of a region while patching another. Offsets only move
//! forward. There is no seek — re-reading takes a fresh cursor over the
//! same region.
//!
//! Each operation validates its full byte range before touching region or
//! offset state, so a failed call is a no-op.

use crate::codec;
use crate::error::{Error, Result};
use crate::kind::{ByteOrder, NumericKind, TextEncoding};
use crate::region::Region;
use crate::value::Value;

/// A cursor over a [`Region`].
#[derive(Debug, Clone)]
pub struct Cursor {
    region: Region,
    read_offset: usize,
    write_offset: usize,
    order: ByteOrder,
}

impl Cursor {
    /// Creates a little-endian cursor with both offsets at zero.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self::with_order(region, ByteOrder::default())
    }

    /// Creates a cursor with an explicit byte order.
    #[must_use]
    pub fn with_order(region: Region, order: ByteOrder) -> Self {
        Self {
            region,
            read_offset: 0,
            write_offset: 0,
            order,
        }
    }

    /// Returns the underlying region.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the current read offset.
    #[must_use]
    pub const fn read_offset(&self) -> usize {
        self.read_offset
    }

    /// Returns the current write offset.
    #[must_use]
    pub const fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// Returns the cursor's byte order.
    #[must_use]
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes left to read before the end of the region.
    #[must_use]
    pub const fn remaining_read(&self) -> usize {
        self.region.len() - self.read_offset
    }

    /// Bytes left to write before the end of the region.
    #[must_use]
    pub const fn remaining_write(&self) -> usize {
        self.region.len() - self.write_offset
    }

    fn check_read(&self, required: usize) -> Result<()> {
        let available = self.remaining_read();
        if required > available {
            return Err(Error::EndOfBuffer {
                required,
                available,
            });
        }
        Ok(())
    }

    fn check_write(&self, required: usize) -> Result<()> {
        let available = self.remaining_write();
        if required > available {
            return Err(Error::EndOfBuffer {
                required,
                available,
            });
        }
        Ok(())
    }

    /// Reads `dst.len()` bytes at the read offset and advances on success.
    fn fill_read(&mut self, dst: &mut [u8]) -> Result<()> {
        self.check_read(dst.len())?;
        self.region.read_at(self.read_offset, dst)?;
        self.read_offset += dst.len();
        Ok(())
    }

    /// Writes `src` at the write offset and advances on success.
    fn push_write(&mut self, src: &[u8]) -> Result<()> {
        self.check_write(src.len())?;
        self.region.write_at(self.write_offset, src)?;
        self.write_offset += src.len();
        Ok(())
    }

    /// Reads an i8 and advances the read offset by 1.
    pub fn read_i8(&mut self) -> Result<i8> {
        let mut buf = [0u8; 1];
        self.fill_read(&mut buf)?;
        Ok(buf[0] as i8)
    }

    /// Reads a u8 and advances the read offset by 1.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill_read(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads an i16 in the cursor's byte order and advances by 2.
    pub fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            i16::from_le_bytes(buf)
        } else {
            i16::from_be_bytes(buf)
        })
    }

    /// Reads a u16 in the cursor's byte order and advances by 2.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            u16::from_le_bytes(buf)
        } else {
            u16::from_be_bytes(buf)
        })
    }

    /// Reads an i32 in the cursor's byte order and advances by 4.
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            i32::from_le_bytes(buf)
        } else {
            i32::from_be_bytes(buf)
        })
    }

    /// Reads a u32 in the cursor's byte order and advances by 4.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            u32::from_le_bytes(buf)
        } else {
            u32::from_be_bytes(buf)
        })
    }

    /// Reads an i64 in the cursor's byte order and advances by 8.
    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            i64::from_le_bytes(buf)
        } else {
            i64::from_be_bytes(buf)
        })
    }

    /// Reads a u64 in the cursor's byte order and advances by 8.
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            u64::from_le_bytes(buf)
        } else {
            u64::from_be_bytes(buf)
        })
    }

    /// Reads an f32 in the cursor's byte order and advances by 4.
    pub fn read_f32(&mut self) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            f32::from_le_bytes(buf)
        } else {
            f32::from_be_bytes(buf)
        })
    }

    /// Reads an f64 in the cursor's byte order and advances by 8.
    pub fn read_f64(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.fill_read(&mut buf)?;
        Ok(if self.order.is_little() {
            f64::from_le_bytes(buf)
        } else {
            f64::from_be_bytes(buf)
        })
    }

    /// Writes an i8 and advances the write offset by 1.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.push_write(&[value as u8])
    }

    /// Writes a u8 and advances the write offset by 1.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.push_write(&[value])
    }

    /// Writes an i16 in the cursor's byte order and advances by 2.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes a u16 in the cursor's byte order and advances by 2.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes an i32 in the cursor's byte order and advances by 4.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes a u32 in the cursor's byte order and advances by 4.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes an i64 in the cursor's byte order and advances by 8.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes a u64 in the cursor's byte order and advances by 8.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes an f32 in the cursor's byte order and advances by 4.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Writes an f64 in the cursor's byte order and advances by 8.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        let bytes = if self.order.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        };
        self.push_write(&bytes)
    }

    /// Reads one value of a dynamically chosen kind.
    pub fn read_value(&mut self, kind: NumericKind) -> Result<Value> {
        let width = kind.width();
        self.check_read(width)?;
        let value = codec::decode_at(&self.region, self.read_offset, kind, self.order)?;
        self.read_offset += width;
        Ok(value)
    }

    /// Writes one value as a dynamically chosen kind, clamping it into the
    /// kind's representable range first.
    pub fn write_value(&mut self, kind: NumericKind, value: Value) -> Result<()> {
        let width = kind.width();
        self.check_write(width)?;
        codec::encode_at(&self.region, self.write_offset, kind, value, self.order)?;
        self.write_offset += width;
        Ok(())
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill_read(&mut buf)?;
        Ok(buf)
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.push_write(bytes)
    }

    /// Writes another region's entire contents at the write offset.
    pub fn write_region(&mut self, source: &Region) -> Result<()> {
        self.push_write(&source.to_vec())
    }

    /// Reads `len` bytes and decodes them as text.
    ///
    /// # Errors
    /// [`Error::EndOfBuffer`] if fewer than `len` bytes remain,
    /// [`Error::InvalidText`] if the bytes are not valid in `encoding`.
    /// The read offset is unchanged on either failure.
    pub fn read_string(&mut self, len: usize, encoding: TextEncoding) -> Result<String> {
        self.check_read(len)?;
        let mut buf = vec![0u8; len];
        self.region.read_at(self.read_offset, &mut buf)?;
        let text = decode_text(&buf, encoding, self.read_offset)?;
        self.read_offset += len;
        Ok(text)
    }

    /// Encodes `text` and writes it, advancing by the encoded byte length.
    pub fn write_string(&mut self, text: &str, encoding: TextEncoding) -> Result<()> {
        let bytes = encode_text(text, encoding, self.write_offset)?;
        self.push_write(&bytes)
    }

    /// Reads `count` values of `kind`, preserving order.
    ///
    /// The whole span is validated up front, so a short region fails
    /// before the first element is consumed.
    pub fn read_array(&mut self, kind: NumericKind, count: usize) -> Result<Vec<Value>> {
        self.check_read(kind.width().saturating_mul(count))?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_value(kind)?);
        }
        Ok(values)
    }

    /// Writes every value as `kind`, in order, clamping each.
    ///
    /// The whole span is validated up front; a short region fails before
    /// any element is written.
    pub fn write_array(&mut self, kind: NumericKind, values: &[Value]) -> Result<()> {
        self.check_write(kind.width().saturating_mul(values.len()))?;
        for &value in values {
            self.write_value(kind, value)?;
        }
        Ok(())
    }

    /// Carves a `len`-byte child cursor out at the write offset.
    ///
    /// The child shares storage with this cursor's region, inherits its
    /// byte order and starts with both of its own offsets at zero. This
    /// cursor's write offset advances past the carved range.
    pub fn slice(&mut self, len: usize) -> Result<Cursor> {
        self.check_write(len)?;
        let sub = self.region.slice(self.write_offset, len)?;
        self.write_offset += len;
        Ok(Cursor::with_order(sub, self.order))
    }
}

fn decode_text(bytes: &[u8], encoding: TextEncoding, base: usize) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            Err(e) => Err(Error::InvalidText {
                encoding,
                offset: base + e.valid_up_to(),
            }),
        },
        TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            Some(pos) => Err(Error::InvalidText {
                encoding,
                offset: base + pos,
            }),
            None => Ok(bytes.iter().map(|&b| b as char).collect()),
        },
        // Latin-1 maps every byte to the code point of the same value.
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn encode_text(text: &str, encoding: TextEncoding, base: usize) -> Result<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Ascii => match text.bytes().position(|b| !b.is_ascii()) {
            Some(pos) => Err(Error::InvalidText {
                encoding,
                offset: base + pos,
            }),
            None => Ok(text.as_bytes().to_vec()),
        },
        TextEncoding::Latin1 => {
            let mut out = Vec::with_capacity(text.len());
            for c in text.chars() {
                let cp = c as u32;
                if cp > 0xFF {
                    return Err(Error::InvalidText {
                        encoding,
                        offset: base + out.len(),
                    });
                }
                out.push(cp as u8);
            }
            Ok(out)
        }
    }
}
