//! depklite - extract data from DOS executables compressed with PKLITE.
//!
//! ```bash
//! depklite -d -o KDREAMS.BIN KDREAMS.EXE 800
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use pklite::{DEFAULT_CAPACITY, UnpackError, UnpackOptions};
use tracing::{debug, info, warn};

/// Largest capacity tried when growing the output after an overflow.
const MAX_CAPACITY: usize = 64 << 20;

#[derive(Parser, Debug)]
#[command(name = "depklite", version)]
#[command(about = "Extract data from DOS executables compressed with PKLITE")]
struct Args {
    /// Executable to decompress
    input: PathBuf,

    /// Start of the compressed data, decimal or 0x-prefixed hex
    #[arg(default_value = "0", value_parser = parse_number)]
    offset: usize,

    /// Enable decryption of literal bytes
    #[arg(short, long)]
    decrypt: bool,

    /// Write to this file instead of <INPUT>.dep
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output size limit in bytes; skips the header estimate and retries
    #[arg(long, value_parser = parse_number)]
    capacity: Option<usize>,

    /// Be more verbose: 0 is quiet, 1 logs each step, 2 traces every instruction
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        num_args = 0..=1,
        require_equals = true,
        default_value = "0",
        default_missing_value = "1"
    )]
    verbose: u8,
}

fn parse_number(arg: &str) -> Result<usize, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{arg}': {e}"))
}

fn init_tracing(args: &Args) {
    // RUST_LOG wins when set; otherwise --verbose picks the level for our crates.
    let fallback = match args.verbose {
        0 => "warn",
        1 => "depklite=debug,pklite=debug",
        _ => "depklite=trace,pklite=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let image = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    debug!(file_size = image.len(), "read input");

    if args.offset > image.len() {
        bail!(
            "offset {} is past the end of {} ({} bytes)",
            args.offset,
            args.input.display(),
            image.len()
        );
    }

    let compressed = &image[args.offset..];
    info!(
        bytes = compressed.len(),
        offset = args.offset,
        decrypt = args.decrypt,
        "decompressing"
    );

    let unpacked = match args.capacity {
        Some(capacity) => unpack_once(compressed, args.decrypt, capacity)?,
        None => unpack_growing(compressed, args.decrypt, initial_capacity(&image))?,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    fs::write(&output, &unpacked)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Writing {} bytes to '{}'", unpacked.len(), output.display());
    Ok(())
}

fn initial_capacity(image: &[u8]) -> usize {
    match pklite::estimate_length_from_bytes(image) {
        Ok(Some(estimate)) => {
            debug!(estimate, "estimated size from header");
            estimate
        }
        Ok(None) | Err(_) => {
            debug!("no usable size estimate, using default");
            DEFAULT_CAPACITY
        }
    }
}

fn unpack_once(compressed: &[u8], decrypt: bool, capacity: usize) -> Result<Vec<u8>> {
    let options = UnpackOptions::default().capacity(capacity).decrypt(decrypt);
    pklite::unpack_with(compressed, &options).context("decompression failed")
}

/// Doubles the capacity after each overflow until it reaches [`MAX_CAPACITY`].
fn unpack_growing(compressed: &[u8], decrypt: bool, initial: usize) -> Result<Vec<u8>> {
    let mut capacity = initial.clamp(1, MAX_CAPACITY);
    loop {
        let options = UnpackOptions::default().capacity(capacity).decrypt(decrypt);
        match pklite::unpack_with(compressed, &options) {
            Err(UnpackError::BufferOverflow { .. }) if capacity < MAX_CAPACITY => {
                warn!(capacity, "output buffer too small, retrying");
                capacity = (capacity * 2).min(MAX_CAPACITY);
            }
            result => return result.context("decompression failed"),
        }
    }
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".dep");
    PathBuf::from(name)
}
