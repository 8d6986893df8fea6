// SPDX-License-Identifier: MIT

//! File reading with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for a gate that
//    re-runs on every push
#![allow(unsafe_code)]
//!
//! Small files are read straight into memory; anything at or past the
//! threshold is memory-mapped so scanning large generated files does not
//! double their footprint. Either way the content is validated as UTF-8
//! lazily, and binary files simply yield no text.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read.
const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read a file using the strategy its size calls for.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;

        if meta.len() < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: file handle is valid (just opened), the mapping is
            // never mutated, and stale data on concurrent modification is
            // acceptable here.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    /// Content as a string slice. Returns None when the bytes are not
    /// valid UTF-8, which is how binary files are recognized.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(bytes) => std::str::from_utf8(bytes).ok(),
            FileContent::Mapped(mmap) => std::str::from_utf8(mmap).ok(),
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
