use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::output::{self, BitLength, Format};
use crate::tiger::TigerHash;

/// Read size used when feeding from a stream.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// How a file is fed into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedMethod {
    /// Plain sequential reads of `chunk_size` bytes.
    #[default]
    Read,
    /// Memory mapped windows.
    Mmap,
}

/// Settings of a digest run: how input is fed and how the root is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Encoding of the printed digest.
    pub format: Format,

    /// Number of leading digest bits to keep.
    pub bits: BitLength,

    /// Size of a single read when digesting a stream. Does not affect
    /// the resulting digest.
    pub chunk_size: usize,

    /// Source access method for files.
    pub method: FeedMethod,
}

impl Default for DigestConfig {
    fn default() -> Self {
        DigestConfig {
            format: Format::default(),
            bits: BitLength::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            method: FeedMethod::default(),
        }
    }
}

impl DigestConfig {
    /// Creates settings with the default feed parameters.
    pub fn new(format: Format, bits: BitLength) -> Self {
        DigestConfig {
            format,
            bits,
            ..Default::default()
        }
    }

    /// Checks the settings are usable.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.chunk_size > 0, "chunk size must be positive");
        ensure!(
            self.method != FeedMethod::Mmap || cfg!(feature = "mmap"),
            "memory mapped input is not supported by this build"
        );
        Ok(())
    }

    /// Truncates and encodes a root according to these settings.
    pub fn render(&self, digest: &TigerHash) -> Vec<u8> {
        output::render(digest, self.bits, self.format)
    }
}
