//! Numeric kind taxonomy, byte order and text encodings.
//!
//! The ten fixed-width numeric kinds form a closed set; every kind has a
//! fixed byte width and a wire name usable as a dynamic tag.

use crate::error::{Error, Result};

/// Fixed-width numeric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit IEEE-754 floating point.
    Float,
    /// 64-bit IEEE-754 floating point.
    Double,
}

/// All kinds in declaration order, indexable by `NumericKind as usize`.
pub const ALL_KINDS: [NumericKind; 10] = [
    NumericKind::Int8,
    NumericKind::Uint8,
    NumericKind::Int16,
    NumericKind::Uint16,
    NumericKind::Int32,
    NumericKind::Uint32,
    NumericKind::Int64,
    NumericKind::Uint64,
    NumericKind::Float,
    NumericKind::Double,
];

impl NumericKind {
    /// Returns the encoded width of the kind in bytes.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float => 4,
            Self::Int64 | Self::Uint64 | Self::Double => 8,
        }
    }

    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Parses a kind from its wire name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidKind`] for an unrecognized tag.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "int8" => Ok(Self::Int8),
            "uint8" => Ok(Self::Uint8),
            "int16" => Ok(Self::Int16),
            "uint16" => Ok(Self::Uint16),
            "int32" => Ok(Self::Int32),
            "uint32" => Ok(Self::Uint32),
            "int64" => Ok(Self::Int64),
            "uint64" => Ok(Self::Uint64),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            _ => Err(Error::InvalidKind {
                name: name.to_string(),
            }),
        }
    }

    /// Returns true if this is a signed integer kind.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true if this is an unsigned integer kind.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Returns true if this is a floating point kind.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order used when encoding or decoding multi-byte kinds.
///
/// Endianness is explicit per-cursor configuration; there is no
/// process-wide default beyond `ByteOrder::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (the default).
    #[default]
    LittleEndian,
    /// Big-endian byte order.
    BigEndian,
}

impl ByteOrder {
    /// Parses byte order from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "little" | "littleendian" | "little-endian" | "le" => Some(Self::LittleEndian),
            "big" | "bigendian" | "big-endian" | "be" => Some(Self::BigEndian),
            _ => None,
        }
    }

    /// Returns true for little-endian.
    #[must_use]
    pub const fn is_little(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

/// Text encoding for string reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8 (the default).
    #[default]
    Utf8,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1, one byte per character.
    Latin1,
}

impl TextEncoding {
    /// Returns the canonical label of the encoding.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin-1",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
