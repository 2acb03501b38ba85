//! Core types for **enzymes**, **enzyme tables**, **cut sites** and **fragments**.
//!
//! This module holds the data model used across the crate. Everything here is
//! plain owned data: a digest run builds these values once and never mutates
//! them afterwards.
//!
//! # Coordinates
//! Cut sites are reported **1-based** (`match_start + 1`), while fragments are
//! stored as **0-based half-open** ranges so they can slice the sequence
//! directly.
use core::fmt;
use std::collections::HashMap;

/// A restriction enzyme: a name and the exact motif it recognises.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Enzyme {
    /// Name as written in the enzyme file (e.g. `"EcoRI"`).
    pub name: String,
    /// Uppercase recognition motif over `{A,C,G,T}` (e.g. `"GAATTC"`).
    pub motif: String,
}

impl Enzyme {
    /// Build an enzyme if `motif` is a valid, non-empty `[ACGT]+` string.
    ///
    /// The motif is expected to be uppercased already; lowercase bases are rejected.
    ///
    /// # Examples
    /// ```
    /// use redigest::enzyme::Enzyme;
    /// assert!(Enzyme::new("EcoRI", "GAATTC").is_some());
    /// assert!(Enzyme::new("BadEnzyme", "XYZQ").is_none());
    /// assert!(Enzyme::new("Empty", "").is_none());
    /// ```
    pub fn new(name: impl Into<String>, motif: impl Into<String>) -> Option<Self> {
        let motif = motif.into();
        if !is_valid_motif(&motif) {
            return None;
        }
        Some(Enzyme { name: name.into(), motif })
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} ({})", self.name, self.motif) }
}

/// Return `true` when `motif` is one or more characters, all from `{A,C,G,T}`.
pub fn is_valid_motif(motif: &str) -> bool {
    !motif.is_empty() && motif.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}

/// Insertion-ordered mapping from enzyme name to motif.
///
/// Re-inserting a known name replaces its motif but keeps the slot of the first
/// insertion, so iteration order is the order in which names were first seen.
#[derive(Clone, Debug, Default)]
pub struct EnzymeTable {
    entries: Vec<Enzyme>,
    index: HashMap<String, usize>,
}

impl EnzymeTable {
    pub fn new() -> Self { Self::default() }

    /// Insert `enzyme`, returning the motif it replaced (if the name was known).
    pub fn insert(&mut self, enzyme: Enzyme) -> Option<String> {
        match self.index.get(&enzyme.name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].motif, enzyme.motif)),
            None => {
                self.index.insert(enzyme.name.clone(), self.entries.len());
                self.entries.push(enzyme);
                None
            }
        }
    }

    /// Look up the motif for `name` (exact, case-sensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].motif.as_str())
    }

    pub fn contains(&self, name: &str) -> bool { self.index.contains_key(name) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Enzymes in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Enzyme> { self.entries.iter() }
}

impl<'a> IntoIterator for &'a EnzymeTable {
    type Item = &'a Enzyme;
    type IntoIter = std::slice::Iter<'a, Enzyme>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl FromIterator<Enzyme> for EnzymeTable {
    fn from_iter<I: IntoIterator<Item = Enzyme>>(iter: I) -> Self {
        let mut t = EnzymeTable::new();
        for e in iter {
            t.insert(e);
        }
        t
    }
}

/// A single cut site: which enzyme matched and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CutSite {
    /// Name of the enzyme whose motif matched.
    pub enzyme: String,
    /// 1-based position, i.e. the 0-based start of the match plus one.
    pub position: usize,
}

impl CutSite {
    pub fn new(enzyme: impl Into<String>, position: usize) -> Self {
        CutSite { enzyme: enzyme.into(), position }
    }
}

impl fmt::Display for CutSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}: position {}", self.enzyme, self.position) }
}

/// A fragment as a 0-based half-open range `[start, end)` into the sequence.
///
/// A range with `end < start` is treated as empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Fragment {
    pub start: usize,
    pub end: usize,
}

impl Fragment {
    pub fn len(&self) -> usize { self.end.saturating_sub(self.start) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Borrow this fragment's bases from `seq`; out-of-range or inverted ranges give `""`.
    pub fn slice<'a>(&self, seq: &'a str) -> &'a str { seq.get(self.start..self.end).unwrap_or("") }
}

#[cfg(test)]
mod enzyme_table_tests {
    use super::*;

    fn enz(name: &str, motif: &str) -> Enzyme { Enzyme::new(name, motif).unwrap() }

    #[test]
    fn later_definition_wins_but_keeps_first_slot() {
        let mut t = EnzymeTable::new();
        t.insert(enz("EcoRI", "GAATTC"));
        t.insert(enz("BamHI", "GGATCC"));
        let old = t.insert(enz("EcoRI", "AAAA"));
        assert_eq!(old.as_deref(), Some("GAATTC"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("EcoRI"), Some("AAAA"));
        let names: Vec<_> = t.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["EcoRI", "BamHI"]);
    }

    #[test]
    fn motif_validation_is_whole_field() {
        assert!(is_valid_motif("ACGT"));
        assert!(!is_valid_motif("ACGTN"));
        assert!(!is_valid_motif("acgt"));
        assert!(!is_valid_motif(""));
        assert!(!is_valid_motif("GAATTC "));
    }

    #[test]
    fn fragment_slices_half_open_range() {
        let f = Fragment { start: 1, end: 10 };
        assert_eq!(f.len(), 9);
        assert_eq!(f.slice("GAATTCAAAGAATTC"), "AATTCAAAG");
        assert!(Fragment { start: 3, end: 3 }.is_empty());
    }

    #[test]
    fn inverted_fragment_is_empty_not_underflowing() {
        let f = Fragment { start: 5, end: 3 };
        assert_eq!(f.len(), 0);
        assert!(f.is_empty());
        assert_eq!(f.slice("ACGTACGT"), "");
    }

    #[test]
    fn cut_site_display_matches_report_line() {
        assert_eq!(CutSite::new("EcoRI", 7).to_string(), "EcoRI: position 7");
    }
}
