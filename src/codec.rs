//! Payload Codec Module
//!
//! Stateless zstd compression applied to every value before it reaches a
//! backend, and reversed before `get` returns.

use crate::error::{CacheError, Result};

/// zstd level passed to the encoder; 0 selects the library default.
const COMPRESSION_LEVEL: i32 = 0;

// == Compress ==
/// Compresses a payload with zstd.
///
/// Symmetric with [`decompress`] for every byte sequence, including the
/// empty one (an empty input produces a valid empty frame).
pub fn compress(src: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::encode_all(src, COMPRESSION_LEVEL).map_err(CacheError::codec)
}

// == Decompress ==
/// Decompresses a zstd payload.
///
/// Fails with [`CacheError::Codec`] on corrupt or truncated input, which is
/// distinct from `NotExists`: corruption is a hard failure, not absence.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::decode_all(src).map_err(CacheError::codec)
}
