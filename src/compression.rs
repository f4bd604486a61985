//! Codec-generic entry points of the gateway.
//!
//! The `*_into` functions work only on caller-supplied buffers and never
//! allocate. `compress_to_vec` and `decompress_to_vec` are convenience layers
//! that size a `Vec` and then call through the same checks.

use crate::config::Codec;
use crate::error::Result;

/// Worst-case compressed size of `len` bytes under `codec`.
///
/// Required headroom for [`Codec::Lz4`]; advisory for [`Codec::Deflate`].
pub fn compress_bound(codec: Codec, len: usize) -> Result<usize> {
    match codec {
        #[cfg(feature = "codec-lz4")]
        Codec::Lz4 => crate::compression_lz4::compress_bound(len),
        #[cfg(feature = "codec-deflate")]
        Codec::Deflate => crate::compression_deflate::compress_bound(len),
    }
}

/// Compress `input` into `output`, returning the number of bytes written.
pub fn compress_into(codec: Codec, input: &[u8], output: &mut [u8]) -> Result<usize> {
    match codec {
        #[cfg(feature = "codec-lz4")]
        Codec::Lz4 => crate::compression_lz4::compress_into(input, output),
        #[cfg(feature = "codec-deflate")]
        Codec::Deflate => crate::compression_deflate::compress_into(input, output),
    }
}

/// Decompress `input` into `output`, returning the number of bytes written.
///
/// For [`Codec::Lz4`] `output.len()` must be the exact original length and
/// the return value always equals it. For [`Codec::Deflate`] it is the
/// capacity and the return value may be smaller.
pub fn decompress_into(codec: Codec, input: &[u8], output: &mut [u8]) -> Result<usize> {
    match codec {
        #[cfg(feature = "codec-lz4")]
        Codec::Lz4 => {
            crate::compression_lz4::decompress_into(input, output)?;
            Ok(output.len())
        }
        #[cfg(feature = "codec-deflate")]
        Codec::Deflate => crate::compression_deflate::decompress_into(input, output),
    }
}

/// Compress into a freshly allocated buffer sized by [`compress_bound`].
pub fn compress_to_vec(codec: Codec, data: &[u8]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; compress_bound(codec, data.len())?];
    let written = compress_into(codec, data, &mut out)?;
    out.truncate(written);
    Ok(out)
}

/// Decompress into a freshly allocated buffer of `size` bytes.
///
/// `size` is the exact original length for LZ4 and the capacity for
/// DEFLATE; the result is truncated to what was written.
pub fn decompress_to_vec(codec: Codec, data: &[u8], size: usize) -> Result<Vec<u8>> {
    crate::error::ensure_len(codec, size)?;
    let mut out = vec![0u8; size];
    let written = decompress_into(codec, data, &mut out)?;
    out.truncate(written);
    Ok(out)
}
