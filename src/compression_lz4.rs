use crate::config::Codec;
use crate::error::{Error, Result, ensure_len};

const CODEC: Codec = Codec::Lz4;

/// Worst-case compressed size for `len` input bytes.
pub fn compress_bound(len: usize) -> Result<usize> {
    ensure_len(CODEC, len)?;
    let bound = lz4_flex::block::get_maximum_output_size(len);
    if bound == 0 || bound > CODEC.max_len() {
        return Err(Error::BoundComputationFailed { codec: CODEC, len });
    }
    Ok(bound)
}

/// Compress `input` as a single LZ4 block into `output`.
///
/// `output` must hold at least [`compress_bound`] bytes; a shorter buffer is
/// rejected before anything is written to it.
pub fn compress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    ensure_len(CODEC, input.len())?;
    ensure_len(CODEC, output.len())?;

    let bound = compress_bound(input.len())?;
    if output.len() < bound {
        return Err(Error::OutputTooSmall {
            capacity: output.len(),
            bound,
        });
    }

    let written = lz4_flex::block::compress_into(input, output).map_err(|e| {
        tracing::debug!(error = %e, input = input.len(), "lz4 compression failed");
        Error::CompressionFailed(CODEC)
    })?;
    if written == 0 {
        return Err(Error::CompressionFailed(CODEC));
    }

    tracing::trace!(input = input.len(), written, "lz4 block compressed");
    Ok(written)
}

/// Decompress an LZ4 block whose original length is exactly `output.len()`.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<()> {
    ensure_len(CODEC, input.len())?;
    ensure_len(CODEC, output.len())?;

    let written = lz4_flex::block::decompress_into(input, output).map_err(|e| {
        tracing::debug!(error = %e, input = input.len(), "lz4 decompression failed");
        Error::DecompressionFailed(CODEC)
    })?;
    if written != output.len() {
        tracing::debug!(
            expected = output.len(),
            actual = written,
            "lz4 block decoded short"
        );
        return Err(Error::LengthMismatch {
            expected: output.len(),
            actual: written,
        });
    }

    tracing::trace!(input = input.len(), written, "lz4 block decompressed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn compress_vec(data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; compress_bound(data.len()).unwrap()];
        let n = compress_into(data, &mut out).unwrap();
        out.truncate(n);
        out
    }

    #[test]
    fn roundtrip() {
        let data = b"test data for lz4 backend roundtrip verification";
        let compressed = compress_vec(data);
        let mut restored = vec![0u8; data.len()];
        decompress_into(&compressed, &mut restored).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn repetitive_input_shrinks() {
        let data = vec![b'a'; 4096];
        let compressed = compress_vec(&data);
        assert!(compressed.len() < 100, "got {} bytes", compressed.len());
    }

    #[test]
    fn bound_grows_with_input() {
        let small = compress_bound(0).unwrap();
        let large = compress_bound(1 << 20).unwrap();
        assert!(small > 0);
        assert!(large > 1 << 20);
    }

    #[test]
    fn bound_overflowing_signed_range_fails() {
        let err = compress_bound(i32::MAX as usize).unwrap_err();
        assert_eq!(
            err,
            Error::BoundComputationFailed {
                codec: Codec::Lz4,
                len: i32::MAX as usize
            }
        );
    }

    #[test]
    fn bound_above_limit_is_size_error() {
        let err = compress_bound(i32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::SizeLimitExceeded);
    }

    #[test]
    fn one_byte_short_is_rejected_untouched() {
        let data = b"capacity check payload";
        let bound = compress_bound(data.len()).unwrap();
        let mut out = vec![0xAA; bound - 1];
        let err = compress_into(data, &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::OutputTooSmall {
                capacity: bound - 1,
                bound
            }
        );
        assert!(out.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn empty_input_roundtrip() {
        let compressed = compress_vec(b"");
        assert!(!compressed.is_empty());
        let mut restored = [0u8; 0];
        decompress_into(&compressed, &mut restored).unwrap();
    }

    #[test]
    fn longer_output_than_original_is_length_mismatch() {
        let data = b"exact length contract for the fast codec";
        let compressed = compress_vec(data);
        let mut restored = vec![0u8; data.len() + 1];
        let err = decompress_into(&compressed, &mut restored).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                expected: data.len() + 1,
                actual: data.len()
            }
        );
    }

    #[test]
    fn shorter_output_than_original_never_truncates() {
        let data = b"exact length contract for the fast codec";
        let compressed = compress_vec(data);
        let mut restored = vec![0u8; data.len() - 1];
        let err = decompress_into(&compressed, &mut restored).unwrap_err();
        assert!(
            matches!(
                err,
                Error::DecompressionFailed(_) | Error::LengthMismatch { .. }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn garbage_input_fails() {
        let mut out = vec![0u8; 64];
        let err = decompress_into(&[0xF0, 0xFF, 0xFF], &mut out).unwrap_err();
        assert_eq!(err, Error::DecompressionFailed(Codec::Lz4));
    }

    #[test]
    fn empty_compressed_input_fails() {
        let mut out = vec![0u8; 4];
        let err = decompress_into(&[], &mut out).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DecompressionFailed);
    }
}
