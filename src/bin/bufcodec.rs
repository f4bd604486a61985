use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use bufcodec::{Codec, Error, compression};
use clap::{Parser, Subcommand};

const DEFAULT_MAX_SIZE: usize = 256 * 1024 * 1024;

#[derive(Parser)]
#[command(
    name = "bufcodec",
    about = "Compress and decompress raw buffers with LZ4 or DEFLATE"
)]
struct Cli {
    /// Codec: lz4 (alias fast) or deflate (alias zlib)
    #[arg(long, env = "BUFCODEC_CODEC", default_value = "lz4")]
    codec: Codec,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into raw codec output
    Compress {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Decompress raw codec output
    Decompress {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Original size. Required for lz4; starting capacity for deflate
        #[arg(long)]
        size: Option<usize>,

        /// Largest capacity tried when growing the deflate output buffer
        #[arg(long, env = "BUFCODEC_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
        max_size: usize,
    },
    /// Print the worst-case compressed size for an input length
    Bound { len: usize },
}

/// Retry with a doubled buffer until the stream fits or `max` is reached.
///
/// The gateway cannot tell a short buffer from a corrupt stream, so a
/// corrupt input only fails once `max` has been tried.
fn inflate_growing(data: &[u8], start: usize, max: usize) -> anyhow::Result<Vec<u8>> {
    let mut capacity = start.max(1).min(max);
    loop {
        match compression::decompress_to_vec(Codec::Deflate, data, capacity) {
            Ok(out) => return Ok(out),
            Err(Error::DecompressionFailed(_)) if capacity < max => {
                capacity = capacity.saturating_mul(2).min(max);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("deflate output exceeds {capacity} bytes or is corrupt"));
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let codec = cli.codec;

    match cli.command {
        Commands::Compress { input, output } => {
            let data = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let compressed = compression::compress_to_vec(codec, &data)
                .with_context(|| format!("compressing {}", input.display()))?;
            fs::write(&output, &compressed)
                .with_context(|| format!("writing {}", output.display()))?;
            println!(
                "Compressed {} -> {} bytes ({codec})",
                data.len(),
                compressed.len()
            );
        }
        Commands::Decompress {
            input,
            output,
            size,
            max_size,
        } => {
            let data = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let restored = match (codec, size) {
                (Codec::Lz4, Some(size)) => compression::decompress_to_vec(codec, &data, size)
                    .with_context(|| format!("decompressing {}", input.display()))?,
                (Codec::Lz4, None) => {
                    bail!("--size is required for lz4: the block does not store its original length")
                }
                (Codec::Deflate, size) => {
                    let start = size.unwrap_or_else(|| data.len().saturating_mul(4));
                    inflate_growing(&data, start, max_size)
                        .with_context(|| format!("decompressing {}", input.display()))?
                }
            };
            fs::write(&output, &restored)
                .with_context(|| format!("writing {}", output.display()))?;
            println!(
                "Decompressed {} -> {} bytes ({codec})",
                data.len(),
                restored.len()
            );
        }
        Commands::Bound { len } => {
            let bound = compression::compress_bound(codec, len)?;
            println!("{bound}");
        }
    }

    Ok(())
}
