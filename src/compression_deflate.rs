use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::config::Codec;
use crate::error::{Error, Result, ensure_len};

const CODEC: Codec = Codec::Deflate;

/// Advisory worst-case size of a zlib stream for `len` input bytes.
///
/// `compress_into` does not require this much room; it only fails when the
/// stream does not fit.
pub fn compress_bound(len: usize) -> Result<usize> {
    ensure_len(CODEC, len)?;
    let len64 = len as u64;
    let fail = || Error::BoundComputationFailed { codec: CODEC, len };

    let scaled = len64
        .checked_mul(110)
        .map(|n| n / 100 + 128)
        .ok_or_else(fail)?;
    let stored = (len64 / (31 * 1024) + 1)
        .checked_mul(5)
        .and_then(|n| n.checked_add(len64 + 128))
        .ok_or_else(fail)?;

    let bound = scaled.max(stored);
    if bound > CODEC.max_len() as u64 {
        return Err(fail());
    }
    Ok(bound as usize)
}

/// Compress `input` into a single zlib stream in `output`.
///
/// Returns the number of bytes written. Running out of room and stream
/// errors are not told apart.
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    ensure_len(CODEC, input.len())?;
    ensure_len(CODEC, output.len())?;

    let mut stream = Compress::new(Compression::default(), true);
    match stream.compress(input, output, FlushCompress::Finish) {
        Ok(Status::StreamEnd) => {
            let written = stream.total_out() as usize;
            tracing::trace!(input = input.len(), written, "deflate stream compressed");
            Ok(written)
        }
        Ok(status) => {
            tracing::debug!(
                ?status,
                input = input.len(),
                capacity = output.len(),
                "deflate stream did not finish"
            );
            Err(Error::CompressionFailed(CODEC))
        }
        Err(e) => {
            tracing::debug!(error = %e, input = input.len(), "deflate compression failed");
            Err(Error::CompressionFailed(CODEC))
        }
    }
}

/// Decompress one zlib stream into `output`, returning the bytes written.
///
/// `output.len()` is the declared capacity. A buffer that is too small and a
/// corrupt or truncated stream both report `DecompressionFailed`.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    ensure_len(CODEC, input.len())?;
    ensure_len(CODEC, output.len())?;

    let mut stream = Decompress::new(true);
    match stream.decompress(input, output, FlushDecompress::Finish) {
        Ok(Status::StreamEnd) => {
            let written = stream.total_out() as usize;
            tracing::trace!(input = input.len(), written, "deflate stream decompressed");
            Ok(written)
        }
        Ok(status) => {
            tracing::debug!(
                ?status,
                input = input.len(),
                capacity = output.len(),
                "deflate stream did not finish"
            );
            Err(Error::DecompressionFailed(CODEC))
        }
        Err(e) => {
            tracing::debug!(error = %e, input = input.len(), "deflate decompression failed");
            Err(Error::DecompressionFailed(CODEC))
        }
    }
}
