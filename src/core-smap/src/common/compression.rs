use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::Result;

/// Compresses a string using gzip.
pub fn compress_string(input: &str) -> Result<Vec<u8>> {
    compress(input.as_bytes())
}

/// Compresses a byte slice using gzip (no container beyond the gzip member itself).
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    let compressed = encoder.finish()?;
    Ok(compressed)
}

/// Decompress gzip-compressed data as a string.
pub fn decompress_to_string(compressed: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(compressed);
    let mut result = String::new();
    decoder.read_to_string(&mut result)?;
    Ok(result)
}

/// Decompress gzip-compressed data.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}
