#![forbid(unsafe_code)]
//! # redigest
//!
//! In-silico **restriction digest** of a DNA sequence: load a table of enzyme
//! recognition motifs, find every motif occurrence, and split the sequence into
//! fragments at the resulting cut positions.
//!
//! ## Pipeline
//! 1. [`enzymes::load_enzyme_table`] reads `name,motif` records (comma or tab separated).
//! 2. [`seqio::read_sequence`] reads raw text and keeps only `A`, `C`, `G`, `T`.
//! 3. [`detect::CutSiteFinder`] scans each enzyme independently (non-overlapping).
//! 4. [`digest::fragment_bounds`] cuts the sequence at the distinct positions.
//! 5. [`report`] renders the [`digest::Digest`] as text or CSV.
//!
//! ## Coordinates
//! Cut sites are **1-based** (`match_start + 1`). The same number is the
//! 0-based boundary at which the fragment to its left ends.
//!
//! ## Examples
//! ```rust
//! use redigest::enzymes::parse_enzyme_table;
//! use redigest::seqio::Sequence;
//!
//! let table = parse_enzyme_table("# demo\nEcoRI,GAATTC\n".as_bytes()).unwrap();
//! let d = redigest::digest(Sequence::normalize("gaattcAAAgaattc"), &table).unwrap();
//! assert_eq!(d.cut_sites.len(), 2);
//! assert_eq!(d.fragment_lengths(), [1, 9, 5]);
//! assert_eq!(d.fragment_sequences(), ["G", "AATTCAAAG", "AATTC"]);
//! ```

pub mod enzyme;
pub mod enzymes;
pub mod seqio;
pub mod detect;
pub mod digest;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use log::info;

use enzyme::EnzymeTable;
use report::ReportFormat;
use seqio::Sequence;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Find cut sites for every enzyme in `table` and split `sequence` accordingly.
pub fn digest(sequence: Sequence, table: &EnzymeTable) -> Result<digest::Digest> {
    let sites = detect::find_cut_sites(sequence.as_str(), table)?;
    Ok(digest::Digest::new(sequence, sites))
}

/// Restrict `table` to the enzymes named in `names`, keeping table order.
///
/// An empty `names` selects everything. Unknown names are an error.
///
/// # Examples
/// ```
/// use redigest::enzymes::parse_enzyme_table;
/// let t = parse_enzyme_table("EcoRI,GAATTC\nBamHI,GGATCC\n".as_bytes()).unwrap();
/// let s = redigest::select_enzymes(&t, &["BamHI".to_string()]).unwrap();
/// assert_eq!(s.len(), 1);
/// assert!(redigest::select_enzymes(&t, &["NotI".to_string()]).is_err());
/// ```
pub fn select_enzymes(table: &EnzymeTable, names: &[String]) -> Result<EnzymeTable> {
    if names.is_empty() {
        return Ok(table.clone());
    }
    let unknown: Vec<&str> = names.iter().map(String::as_str).filter(|n| !table.contains(n)).collect();
    if !unknown.is_empty() {
        bail!("Unknown enzyme(s): {}", unknown.join(", "));
    }
    Ok(table.iter().filter(|e| names.iter().any(|n| n == &e.name)).cloned().collect())
}

/// Options for a single digest run, as collected by the CLI.
#[derive(Debug, Clone)]
pub struct DigestOpts {
    pub dna_file: PathBuf,
    pub enzyme_file: PathBuf,
    /// Enzyme names to digest with; empty means all.
    pub enzymes: Vec<String>,
    pub format: ReportFormat,
}

/// Load both inputs, digest, and write the report to `out`.
///
/// Fails if the sequence cannot be read, if no valid enzymes remain, or if a
/// selected enzyme is not in the table.
pub fn run<W: Write>(opts: &DigestOpts, out: &mut W) -> Result<()> {
    let sequence = seqio::read_sequence(&opts.dna_file)?;
    info!("sequence: {} bp from {}", sequence.len(), opts.dna_file.display());

    let table = enzymes::load_enzyme_table(&opts.enzyme_file);
    if table.is_empty() {
        bail!("No valid enzymes found.");
    }
    let table = select_enzymes(&table, &opts.enzymes)?;
    info!("enzymes: {} from {}", table.len(), opts.enzyme_file.display());

    let d = digest(sequence, &table)?;
    info!("cut sites: {} | fragments: {}", d.cut_sites.len(), d.fragments.len());
    report::write_digest(out, &d, &table, opts.format)?;
    out.flush()?;
    Ok(())
}
