//! Cut-site detection.
//!
//! Each enzyme is scanned independently with its own single-pattern
//! Aho–Corasick automaton. The scan is greedy and **non-overlapping**: once a
//! motif matches, scanning resumes after the matched region, so a motif that
//! overlaps itself (`AAA` in `AAAA`) is reported once.
//!
//! # Examples
//! ```
//! use redigest::detect::find_cut_sites;
//! use redigest::enzyme::{CutSite, Enzyme, EnzymeTable};
//! let table: EnzymeTable = [Enzyme::new("EcoRI", "GAATTC").unwrap()].into_iter().collect();
//! let sites = find_cut_sites("GAATTCGAATTC", &table).unwrap();
//! assert_eq!(sites, vec![CutSite::new("EcoRI", 1), CutSite::new("EcoRI", 7)]);
//! ```
use aho_corasick::{AhoCorasick, AhoCorasickKind, MatchKind};
use anyhow::{Context, Result};
use log::debug;

use crate::enzyme::{CutSite, EnzymeTable};

/// Prebuilt per-enzyme automata, in table order.
pub struct CutSiteFinder<'a> {
    scanners: Vec<(&'a str, AhoCorasick)>,
}

impl<'a> CutSiteFinder<'a> {
    /// Build one automaton per enzyme in `table`.
    pub fn new(table: &'a EnzymeTable) -> Result<Self> {
        let mut scanners = Vec::with_capacity(table.len());
        for e in table {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::Standard)
                .kind(Some(AhoCorasickKind::DFA)) // motifs are short
                .build([e.motif.as_bytes()])
                .with_context(|| format!("building matcher for {}", e))?;
            scanners.push((e.name.as_str(), ac));
        }
        Ok(CutSiteFinder { scanners })
    }

    /// Find all cut sites in `seq`, sorted by 1-based position.
    ///
    /// The sort is stable, so sites sharing a position stay in table order.
    pub fn find(&self, seq: &str) -> Vec<CutSite> {
        let mut sites = Vec::new();
        for (name, ac) in &self.scanners {
            let before = sites.len();
            for m in ac.find_iter(seq) {
                sites.push(CutSite::new(*name, m.start() + 1));
            }
            debug!("{}: {} site(s)", name, sites.len() - before);
        }
        sites.sort_by_key(|s| s.position);
        sites
    }
}

/// One-shot convenience over [`CutSiteFinder`].
pub fn find_cut_sites(seq: &str, table: &EnzymeTable) -> Result<Vec<CutSite>> {
    Ok(CutSiteFinder::new(table)?.find(seq))
}
