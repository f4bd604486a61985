//! Buffer-to-buffer compression gateway over an LZ4 block codec and a zlib
//! DEFLATE codec, with explicit capacity checks and a closed error set.
//!
//! Every call is synchronous and stateless; buffers stay owned by the caller.

pub mod compression;
#[cfg(feature = "codec-deflate")]
mod compression_deflate;
#[cfg(feature = "codec-lz4")]
mod compression_lz4;
mod config;
mod error;
pub mod ffi;

pub use config::{Codec, ParseCodecError};
pub use error::{Error, ErrorCode, Result};

/// Fast codec operations.
#[cfg(feature = "codec-lz4")]
pub mod lz4 {
    pub use crate::compression_lz4::{compress_bound, compress_into, decompress_into};
}

/// DEFLATE codec operations.
#[cfg(feature = "codec-deflate")]
pub mod deflate {
    pub use crate::compression_deflate::{compress_bound, compress_into, decompress_into};
}
