//! Output of a root digest.
//!
//! A root may be truncated to one of the canonical lengths (its leading
//! bytes are kept) and then written as raw bytes, lowercase hex, or the
//! unpadded RFC 4648 Base32 text used by THEX and magnet links.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::tiger::TigerHash;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Digest length kept on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BitLength {
    /// Full Tiger/192 digest.
    #[default]
    #[serde(rename = "192")]
    B192,
    /// Leading 160 bits.
    #[serde(rename = "160")]
    B160,
    /// Leading 128 bits.
    #[serde(rename = "128")]
    B128,
}

impl BitLength {
    /// Parses a bit count.
    pub fn from_bits(bits: u32) -> Result<BitLength> {
        match bits {
            192 => Ok(BitLength::B192),
            160 => Ok(BitLength::B160),
            128 => Ok(BitLength::B128),
            _ => bail!("unsupported digest length {} (expected 192, 160 or 128)", bits),
        }
    }

    /// Returns the length in bits.
    pub fn bits(self) -> u32 {
        match self {
            BitLength::B192 => 192,
            BitLength::B160 => 160,
            BitLength::B128 => 128,
        }
    }

    /// Returns the length in bytes.
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Encoding of a (possibly truncated) digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Unpadded uppercase Base32, as in THEX.
    #[default]
    Thex,
    /// Lowercase hexadecimal.
    Hex,
    /// Digest bytes as is.
    Raw,
}

impl Format {
    /// Encodes `bytes`. Text encodings yield ASCII.
    pub fn encode(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Format::Thex => to_base32(bytes).into_bytes(),
            Format::Hex => to_hex(bytes).into_bytes(),
            Format::Raw => bytes.to_vec(),
        }
    }

    /// Returns `true` for the text encodings.
    pub fn is_text(self) -> bool {
        self != Format::Raw
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Format> {
        match s {
            "thex" | "base32" | "ttx" => Ok(Format::Thex),
            "hex" => Ok(Format::Hex),
            "raw" => Ok(Format::Raw),
            _ => bail!("bad format \"{}\": must be thex, hex or raw", s),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Format::Thex => "thex",
            Format::Hex => "hex",
            Format::Raw => "raw",
        })
    }
}

/// Returns the leading `bits` of a root.
pub fn truncate(digest: &TigerHash, bits: BitLength) -> &[u8] {
    &digest[..bits.bytes()]
}

/// Truncates a root and encodes it.
pub fn render(digest: &TigerHash, bits: BitLength, format: Format) -> Vec<u8> {
    format.encode(truncate(digest, bits))
}

/// Lowercase hexadecimal.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// RFC 4648 Base32 without padding.
pub fn to_base32(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8 + 4) / 5);
    let mut acc: u32 = 0;
    let mut bits = 0;

    for &b in bytes {
        acc = (acc << 8 | u32::from(b)) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(BASE32_ALPHABET[(acc >> bits & 0x1f) as usize]));
        }
    }

    // left-align the tail
    if bits > 0 {
        out.push(char::from(BASE32_ALPHABET[(acc << (5 - bits) & 0x1f) as usize]));
    }

    out
}
