//! Prints Tiger Tree Hashes of files.
//!
//! Usage:
//!   tthsum [--format thex|hex|raw] [--bits 192|160|128] [--mmap] [FILE]...
//!
//! Reads standard input when no file is given. Text formats print one
//! `<digest>  <name>` line per input; `raw` writes the bare digest bytes.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::Parser;
use tigertree::config::{DigestConfig, FeedMethod, DEFAULT_CHUNK_SIZE};
use tigertree::feed;
use tigertree::output::{BitLength, Format};
use tigertree::TigerHash;

#[derive(Parser)]
#[command(name = "tthsum")]
#[command(about = "Compute Tiger Tree Hashes (TTH) of files", long_about = None)]
struct Cli {
    /// Output encoding: thex (Base32), hex or raw
    #[arg(long, default_value = "thex", value_parser = format_parser())]
    format: Format,

    /// Digest length in bits
    #[arg(long, default_value = "192", value_parser = bits_parser())]
    bits: BitLength,

    /// Read files through memory maps
    #[arg(long)]
    mmap: bool,

    /// Bytes per read
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    chunk_size: usize,

    /// Files to hash
    files: Vec<PathBuf>,
}

fn format_parser() -> impl TypedValueParser<Value = Format> {
    PossibleValuesParser::new([
        PossibleValue::new("thex").aliases(["base32", "ttx"]),
        PossibleValue::new("hex"),
        PossibleValue::new("raw"),
    ])
    .try_map(|s| s.parse::<Format>())
}

fn bits_parser() -> impl TypedValueParser<Value = BitLength> {
    PossibleValuesParser::new(["192", "160", "128"])
        .try_map(|s: String| -> Result<BitLength> { BitLength::from_bits(s.parse()?) })
}

fn parse_chunk_size(s: &str) -> Result<usize> {
    let size = s.parse::<usize>()?;
    ensure!(size > 0, "chunk size must be positive");
    Ok(size)
}

impl Cli {
    fn config(&self) -> Result<DigestConfig> {
        let config = DigestConfig {
            format: self.format,
            bits: self.bits,
            chunk_size: self.chunk_size,
            method: if self.mmap {
                FeedMethod::Mmap
            } else {
                FeedMethod::Read
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn emit<W: Write>(
    out: &mut W,
    config: &DigestConfig,
    digest: &TigerHash,
    name: &str,
) -> Result<()> {
    out.write_all(&config.render(digest))?;
    if config.format.is_text() {
        writeln!(out, "  {}", name)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        let digest = feed::digest_reader(io::stdin().lock(), config.chunk_size)
            .context("failed to digest standard input")?;
        emit(&mut out, &config, &digest, "-")?;
    }

    for path in &cli.files {
        let digest = feed::digest_file(path, &config)?;
        emit(&mut out, &config, &digest, &path.display().to_string())?;
    }

    out.flush()?;
    Ok(())
}
