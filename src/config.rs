use std::fmt;
use std::str::FromStr;

/// Codec family a gateway call is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    /// LZ4 block format. Decompression needs the exact original length.
    #[cfg(feature = "codec-lz4")]
    Lz4,
    /// zlib-wrapped DEFLATE at the default level.
    #[cfg(feature = "codec-deflate")]
    Deflate,
}

impl Codec {
    /// Every codec compiled into this build.
    pub const ALL: &'static [Codec] = &[
        #[cfg(feature = "codec-lz4")]
        Codec::Lz4,
        #[cfg(feature = "codec-deflate")]
        Codec::Deflate,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "codec-lz4")]
            Codec::Lz4 => "lz4",
            #[cfg(feature = "codec-deflate")]
            Codec::Deflate => "deflate",
        }
    }

    /// Largest buffer length the codec's native size fields can address.
    ///
    /// LZ4 counts in `i32`; zlib's `uLong` fields are treated as `u32`.
    pub fn max_len(&self) -> usize {
        match *self {
            #[cfg(feature = "codec-lz4")]
            Codec::Lz4 => i32::MAX as usize,
            #[cfg(feature = "codec-deflate")]
            Codec::Deflate => usize::try_from(u32::MAX).unwrap_or(usize::MAX),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown or disabled codec: {0:?}")]
pub struct ParseCodecError(pub String);

impl FromStr for Codec {
    type Err = ParseCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            #[cfg(feature = "codec-lz4")]
            "lz4" | "fast" => Ok(Codec::Lz4),
            #[cfg(feature = "codec-deflate")]
            "deflate" | "zlib" => Ok(Codec::Deflate),
            _ => Err(ParseCodecError(s.to_string())),
        }
    }
}
