use crate::codec;
use crate::config::{RleConfig, DEFAULT_COUNT_WIDTH, DEFAULT_MARKER};
use crate::error::RleError;
use clap::{Parser, Subcommand};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Marker-based run-length encoding codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes a file
    Encode {
        /// Input file to encode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Marker byte reserved for run blocks
        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: u8,

        /// Bytes used per run count, 1 to 4
        #[arg(short, long, default_value_t = DEFAULT_COUNT_WIDTH)]
        width: usize,
    },
    /// Decodes a file
    Decode {
        /// Input file to decode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Marker byte the input was encoded with
        #[arg(short, long, default_value_t = DEFAULT_MARKER)]
        marker: u8,

        /// Bytes per run count the input was encoded with, 1 to 4
        #[arg(short, long, default_value_t = DEFAULT_COUNT_WIDTH)]
        width: usize,
    },
}

#[derive(Debug)]
pub struct FileStats {
    pub input_size: u64,
    pub output_size: u64,
}

impl FileStats {
    pub fn ratio(&self) -> f64 {
        if self.output_size > 0 {
            self.input_size as f64 / self.output_size as f64
        } else {
            0.0
        }
    }
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output, marker, width } => {
            println!("Encoding {} to {}...", input.display(), output.display());
            let config = RleConfig::new(*marker, *width);

            let start = Instant::now();
            let stats = encode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Encoding successful!");
            println!("  Original Size:  {} bytes", stats.input_size);
            println!("  Encoded Size:   {} bytes", stats.output_size);
            println!("  Ratio:          {:.2}x", stats.ratio());
            println!("  Elapsed Time:   {:.2?}", duration);
        }
        Commands::Decode { input, output, marker, width } => {
            println!("Decoding {} to {}...", input.display(), output.display());
            let config = RleConfig::new(*marker, *width);

            let start = Instant::now();
            let stats = decode_file(input, output, &config)?;
            let duration = start.elapsed();

            println!("Decoding successful!");
            println!("  Encoded Size:   {} bytes", stats.input_size);
            println!("  Decoded Size:   {} bytes", stats.output_size);
            println!("  Elapsed Time:   {:.2?}", duration);
        }
    }

    Ok(())
}

/// Encode a whole file in one buffer. The codec has no streaming form, so
/// the input must fit in memory.
pub fn encode_file(input: &Path, output: &Path, config: &RleConfig) -> Result<FileStats, RleError> {
    let data = fs::read(input)?;
    debug!(
        "encoding {} bytes with marker {:#04x}, width {}",
        data.len(),
        config.marker,
        config.effective_count_width()
    );

    let encoded = codec::encode(&data, config);
    fs::write(output, &encoded)?;

    Ok(FileStats {
        input_size: data.len() as u64,
        output_size: encoded.len() as u64,
    })
}

/// Decode a whole file in one buffer.
pub fn decode_file(input: &Path, output: &Path, config: &RleConfig) -> Result<FileStats, RleError> {
    let data = fs::read(input)?;
    debug!(
        "decoding {} bytes with marker {:#04x}, width {}",
        data.len(),
        config.marker,
        config.effective_count_width()
    );

    let decoded = codec::decode(&data, config)?;
    fs::write(output, &decoded)?;

    Ok(FileStats {
        input_size: data.len() as u64,
        output_size: decoded.len() as u64,
    })
}
