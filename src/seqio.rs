//! Sequence input.
//!
//! ### Design
//! - The whole file is read into memory; there is no record structure.
//! - Content is trimmed, uppercased and filtered down to `A`, `C`, `G` and `T`.
//!   Headers, line breaks, digits and ambiguity codes vanish silently; note that
//!   header letters which happen to be nucleotides are kept.
//! - Uppercasing is ASCII-only. Non-ASCII characters are dropped as they are,
//!   even ligatures such as `ﬆ` whose full Unicode uppercase (`ST`) contains a base.
//!
//! ### Errors
//! IO errors are bubbled via `anyhow::Result`, with the path in the context.
//!
//! ### Example
//! ```
//! use redigest::seqio::Sequence;
//! let s = Sequence::normalize("gaattc AAA\ngaattc\n");
//! assert_eq!(s.as_str(), "GAATTCAAAGAATTC");
//! assert_eq!(s.len(), 15);
//! ```
use core::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::enzymes::open_failure;

/// A DNA sequence guaranteed to contain only `A`, `C`, `G` and `T`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// Normalize raw text into a sequence.
    pub fn normalize(raw: &str) -> Self {
        let seq = raw
            .trim()
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
            .collect();
        Sequence(seq)
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Length in bases.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Read and normalize the sequence stored at `path`.
///
/// Non-UTF-8 bytes are replaced before normalization and therefore dropped.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let p = path.as_ref();
    let bytes = std::fs::read(p).with_context(|| open_failure("DNA sequence file", p))?;
    let raw = String::from_utf8_lossy(&bytes);
    let seq = Sequence::normalize(&raw);
    debug!("{}: {} raw bytes -> {} bp", p.display(), bytes.len(), seq.len());
    Ok(seq)
}
