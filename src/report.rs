//! Rendering of a [`Digest`].
//!
//! - [`ReportFormat::Text`]: the human-readable summary (length, sites, fragment lengths).
//! - [`ReportFormat::Sites`]: CSV, one row per cut site (`enzyme,position,motif`).
//! - [`ReportFormat::Fragments`]: CSV, one row per fragment
//!   (`fragment,start,end,length`; 1-based index, 0-based half-open range).
use std::io::{self, Write};

use anyhow::Result;

use crate::digest::Digest;
use crate::enzyme::EnzymeTable;

/// Output formats understood by [`write_digest`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReportFormat {
    #[default]
    Text,
    Sites,
    Fragments,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "sites" | "sites-csv" => Ok(Self::Sites),
            "fragments" | "fragments-csv" => Ok(Self::Fragments),
            other => Err(format!("Unknown format: {} (expected text, sites or fragments)", other)),
        }
    }
}

/// Write the human-readable digest summary.
pub fn write_report<W: Write>(w: &mut W, digest: &Digest) -> io::Result<()> {
    writeln!(w, "\n--- Digest Results ---")?;
    writeln!(w, "Original DNA length: {} bp", digest.sequence.len())?;
    if digest.cut_sites.is_empty() {
        writeln!(w, "No cut sites found.")?;
        return Ok(());
    }
    writeln!(w, "Cut sites:")?;
    for site in &digest.cut_sites {
        writeln!(w, "  {site}")?;
    }
    writeln!(w, "Number of fragments: {}", digest.fragments.len())?;
    writeln!(w, "Fragment lengths (bp): {:?}", digest.fragment_lengths())?;
    writeln!(w, "----------------------")?;
    Ok(())
}

/// Print the human-readable summary to stdout.
pub fn print_report(digest: &Digest) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, digest)
}

/// Write one CSV row per cut site. `table` supplies the motif column.
pub fn write_sites_csv<W: Write>(w: W, digest: &Digest, table: &EnzymeTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["enzyme", "position", "motif"])?;
    for site in &digest.cut_sites {
        let motif = table.get(&site.enzyme).unwrap_or("");
        let position = site.position.to_string();
        wtr.write_record([site.enzyme.as_str(), position.as_str(), motif])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one CSV row per fragment. A digest without cut sites yields the whole
/// sequence as a single fragment.
pub fn write_fragments_csv<W: Write>(w: W, digest: &Digest) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(["fragment", "start", "end", "length"])?;
    let whole;
    let fragments = if digest.fragments.is_empty() {
        whole = crate::digest::fragment_bounds(digest.sequence.len(), []);
        &whole
    } else {
        &digest.fragments
    };
    for (i, f) in fragments.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            f.start.to_string(),
            f.end.to_string(),
            f.len().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `digest` in `format` to `w`.
pub fn write_digest<W: Write>(w: &mut W, digest: &Digest, table: &EnzymeTable, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => write_report(w, digest)?,
        ReportFormat::Sites => write_sites_csv(w, digest, table)?,
        ReportFormat::Fragments => write_fragments_csv(w, digest)?,
    }
    Ok(())
}
