use thiserror::Error;

use crate::config::Codec;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("{codec}: length {len} exceeds addressable limit {max}")]
    SizeLimitExceeded { codec: Codec, len: usize, max: usize },
    #[error("output capacity {capacity} is below worst-case bound {bound}")]
    OutputTooSmall { capacity: usize, bound: usize },
    #[error("{codec}: worst-case bound for {len} input bytes is not representable")]
    BoundComputationFailed { codec: Codec, len: usize },
    #[error("{0}: compression failed")]
    CompressionFailed(Codec),
    #[error("{0}: decompression failed")]
    DecompressionFailed(Codec),
    #[error("decompressed {actual} bytes, expected exactly {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Numeric codes returned across the C ABI.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    InvalidArgument = -1,
    SizeLimitExceeded = -2,
    BoundComputationFailed = -3,
    OutputTooSmall = -4,
    CompressionFailed = -5,
    DecompressionFailed = -6,
    LengthMismatch = -7,
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::SizeLimitExceeded { .. } => ErrorCode::SizeLimitExceeded,
            Error::OutputTooSmall { .. } => ErrorCode::OutputTooSmall,
            Error::BoundComputationFailed { .. } => ErrorCode::BoundComputationFailed,
            Error::CompressionFailed(_) => ErrorCode::CompressionFailed,
            Error::DecompressionFailed(_) => ErrorCode::DecompressionFailed,
            Error::LengthMismatch { .. } => ErrorCode::LengthMismatch,
        }
    }
}

impl<T> From<Result<T>> for ErrorCode {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(e) => e.code(),
        }
    }
}

/// Rejects `len` when it does not fit the codec's native size field.
pub(crate) fn ensure_len(codec: Codec, len: usize) -> Result<()> {
    let max = codec.max_len();
    if len > max {
        return Err(Error::SizeLimitExceeded { codec, len, max });
    }
    Ok(())
}
