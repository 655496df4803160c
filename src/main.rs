//! huffpack CLI: compress and decompress files through the core codec.
//!
//! All console reporting lives here; the library only hands back byte
//! counts and stats.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use huffpack::Codec;

#[derive(Parser)]
#[command(author, version, about = "Byte-oriented Huffman file compressor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a huffpack container
    Compress {
        input: PathBuf,
        output: PathBuf,
    },
    /// Restore the original file from a container
    Decompress {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = Codec::default();

    match cli.command {
        Command::Compress { input, output } => {
            let data =
                fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let started = Instant::now();
            let out = codec.compress(&data)?;
            fs::write(&output, &out.data)
                .with_context(|| format!("writing {}", output.display()))?;
            let elapsed = started.elapsed();

            println!("--- Compression Report ---");
            println!("Original size     : {} bytes", out.original_size);
            println!("Compressed size   : {} bytes", out.compressed_size);
            println!("Compression ratio : {:.2}%", out.ratio * 100.0);
            println!("Distinct symbols  : {}", out.symbol_count);
            println!("Input entropy     : {:.3} bits/byte", out.entropy_bits);
            println!("Compression time  : {} ms", elapsed.as_millis());
        }
        Command::Decompress { input, output } => {
            let data =
                fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let started = Instant::now();
            let decoded = codec.decompress(&data)?;
            fs::write(&output, &decoded)
                .with_context(|| format!("writing {}", output.display()))?;
            let elapsed = started.elapsed();

            println!("--- Decompression Report ---");
            println!("Decompressed size : {} bytes", decoded.len());
            println!("Decompression time: {} ms", elapsed.as_millis());
        }
    }

    Ok(())
}
