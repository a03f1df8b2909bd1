//! Every feeder hands the stream to a fresh [`Tth`] strictly in order and
//! finalizes it once. A failed read aborts the whole digest: no root is
//! returned for a stream that was not consumed to the end.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::config::{DigestConfig, FeedMethod};
use crate::tiger::TigerHash;
use crate::tree::Tth;

/// Size of a single mapped window. A multiple of every common page size
/// and of the Windows allocation granularity.
#[cfg(feature = "mmap")]
pub const MMAP_WINDOW: usize = 1 << 20;

/// Digests everything `reader` yields, reading `chunk_size` bytes at a time.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> Result<TigerHash> {
    ensure!(chunk_size > 0, "chunk size must be positive");

    let mut ctx = Tth::new();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read from stream"),
        };
        ctx.update(&buf[..n]);
    }

    debug!(
        "digested stream of {} bytes, {} leafs",
        ctx.len(),
        ctx.leaf_count()
    );
    Ok(ctx.digest())
}

/// Digests a file with the access method and read size from `config`.
pub fn digest_file<P: AsRef<Path>>(path: P, config: &DigestConfig) -> Result<TigerHash> {
    let path = path.as_ref();
    config.validate()?;

    debug!("digesting {:?} using {:?}", path, config.method);
    match config.method {
        FeedMethod::Read => {
            let file = File::open(path)
                .with_context(|| format!("failed to open file named {:?}", path))?;
            digest_reader(file, config.chunk_size)
                .with_context(|| format!("failed to read file named {:?}", path))
        }
        #[cfg(feature = "mmap")]
        FeedMethod::Mmap => digest_mmap(path),
        #[cfg(not(feature = "mmap"))]
        FeedMethod::Mmap => bail!("memory mapped input is not supported by this build"),
    }
}

/// Digests a file by mapping it into memory one window at a time.
#[cfg(feature = "mmap")]
#[allow(unsafe_code)]
pub fn digest_mmap<P: AsRef<Path>>(path: P) -> Result<TigerHash> {
    use memmap::MmapOptions;

    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open file named {:?}", path))?;
    let size = file
        .metadata()
        .with_context(|| format!("failed to stat file named {:?}", path))?
        .len();

    let mut ctx = Tth::new();
    let mut offset: u64 = 0;
    while offset < size {
        let len = (size - offset).min(MMAP_WINDOW as u64) as usize;

        // The file must not be truncated by another process while mapped.
        let map = unsafe { MmapOptions::new().offset(offset).len(len).map(&file) }
            .with_context(|| format!("mmap() failed on file named {:?}", path))?;
        ctx.update(&map);

        offset += len as u64;
    }

    debug!(
        "digested {:?} ({} bytes, {} leafs) via mmap",
        path,
        ctx.len(),
        ctx.leaf_count()
    );
    Ok(ctx.digest())
}
