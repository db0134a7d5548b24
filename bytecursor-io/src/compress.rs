//! Whole-region compression adapters.
//!
//! These are pass-throughs to external codecs: they take a region's full
//! byte contents and wrap the codec output as a new region. Cursor state
//! is never involved; compressing a bounded range means carving it out
//! with `Region::slice` or `Cursor::slice` first.

use crate::error::Result;
use bytecursor_core::Region;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use std::io::{Read, Write};

/// Supported compression codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// gzip framing over deflate.
    Gzip,
    /// zlib framing over deflate.
    Zlib,
    /// Zstandard.
    Zstd,
}

impl Codec {
    /// Returns the codec's label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Zlib => "zlib",
            Self::Zstd => "zstd",
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compresses a region's bytes, returning a fresh region.
pub fn compress(region: &Region, codec: Codec) -> Result<Region> {
    let input = region.to_vec();
    let output = match codec {
        Codec::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&input)?;
            encoder.finish()?
        }
        Codec::Zlib => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&input)?;
            encoder.finish()?
        }
        Codec::Zstd => zstd::encode_all(input.as_slice(), 0)?,
    };
    tracing::trace!(
        codec = codec.label(),
        input_len = input.len(),
        output_len = output.len(),
        "compressed region"
    );
    Ok(Region::wrap(output))
}

/// Decompresses a region's bytes, returning a fresh region.
pub fn decompress(region: &Region, codec: Codec) -> Result<Region> {
    let input = region.to_vec();
    let output = match codec {
        Codec::Gzip => {
            let mut out = Vec::new();
            GzDecoder::new(input.as_slice()).read_to_end(&mut out)?;
            out
        }
        Codec::Zlib => {
            let mut out = Vec::new();
            ZlibDecoder::new(input.as_slice()).read_to_end(&mut out)?;
            out
        }
        Codec::Zstd => zstd::decode_all(input.as_slice())?,
    };
    tracing::trace!(
        codec = codec.label(),
        input_len = input.len(),
        output_len = output.len(),
        "decompressed region"
    );
    Ok(Region::wrap(output))
}
