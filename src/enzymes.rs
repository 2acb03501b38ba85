//! Loader for enzyme tables.
//!
//! One record per line, `name<sep>motif`, where `<sep>` is a single comma or
//! tab. Consecutive separators delimit empty fields, so `EcoRI,,GAATTC` has an
//! empty motif and is skipped. Blank lines and lines starting with `#` are
//! ignored. Records with fewer than two fields or a motif outside `[ACGT]+` are
//! skipped without complaint; the motif is uppercased before it is checked.
//!
//! ```text
//! # name,motif
//! EcoRI,GAATTC
//! BamHI	GGATCC
//! ```
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{debug, error};
use regex::Regex;

use crate::enzyme::{Enzyme, EnzymeTable};

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new("[,\t]").expect("valid separator regex"));

/// Split on every `,` or `\t`.
fn split_fields(line: &str) -> Vec<&str> { SEPARATOR.split(line).collect() }

/// Parse a single enzyme-file line.
///
/// Returns `None` for blank lines, comments and malformed records.
///
/// # Examples
/// ```
/// use redigest::enzymes::parse_enzyme_line;
/// let e = parse_enzyme_line("  EcoRI , gaattc ").unwrap();
/// assert_eq!((e.name.as_str(), e.motif.as_str()), ("EcoRI", "GAATTC"));
/// assert!(parse_enzyme_line("# comment").is_none());
/// assert!(parse_enzyme_line("BadEnzyme,XYZQ").is_none());
/// ```
pub fn parse_enzyme_line(line: &str) -> Option<Enzyme> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let fields = split_fields(line);
    if fields.len() < 2 {
        return None;
    }
    let name = fields[0].trim();
    let motif = fields[1].trim().to_uppercase();
    Enzyme::new(name, motif)
}

/// Parse an enzyme table from any buffered reader. Read errors propagate.
pub fn parse_enzyme_table<R: BufRead>(reader: R) -> Result<EnzymeTable> {
    let mut table = EnzymeTable::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading enzyme table line {}", lineno + 1))?;
        match parse_enzyme_line(&line) {
            Some(enzyme) => {
                if let Some(old) = table.insert(enzyme) {
                    debug!("line {}: redefinition replaces motif {}", lineno + 1, old);
                }
            }
            None => {
                let t = line.trim();
                if !t.is_empty() && !t.starts_with('#') {
                    debug!("line {}: skipping malformed enzyme record", lineno + 1);
                }
            }
        }
    }
    Ok(table)
}

/// Diagnostic for a failed open: "not found" only when the file is actually missing.
pub(crate) fn open_failure(what: &str, p: &Path) -> String {
    match std::fs::metadata(p) {
        Err(e) if e.kind() == ErrorKind::NotFound => format!("{what} not found at {}", p.display()),
        _ => format!("cannot read {} {}", what.to_ascii_lowercase(), p.display()),
    }
}

/// Read an enzyme table from `path`, failing if the file cannot be opened or read.
pub fn read_enzyme_table<P: AsRef<Path>>(path: P) -> Result<EnzymeTable> {
    let p = path.as_ref();
    let fh = File::open(p).with_context(|| open_failure("Enzyme file", p))?;
    parse_enzyme_table(BufReader::new(fh)).with_context(|| open_failure("Enzyme file", p))
}

/// Read an enzyme table from `path`, logging a diagnostic and returning an
/// empty table if the file cannot be read.
///
/// Callers treat an empty table as "no valid enzymes".
pub fn load_enzyme_table<P: AsRef<Path>>(path: P) -> EnzymeTable {
    match read_enzyme_table(path) {
        Ok(t) => t,
        Err(e) => {
            error!("{e:#}");
            EnzymeTable::new()
        }
    }
}

#[cfg(test)]
mod enzyme_loader_tests {
    use super::*;

    fn parse(text: &str) -> EnzymeTable { parse_enzyme_table(text.as_bytes()).unwrap() }

    #[test]
    fn comma_and_tab_separated_records() {
        let t = parse("EcoRI,GAATTC\nBamHI\tGGATCC\n");
        assert_eq!(t.get("EcoRI"), Some("GAATTC"));
        assert_eq!(t.get("BamHI"), Some("GGATCC"));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let t = parse("# name,motif\n\n   \n  # indented comment\nHindIII,AAGCTT\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("HindIII"), Some("AAGCTT"));
    }

    #[test]
    fn invalid_motifs_and_short_lines_are_skipped() {
        let t = parse("BadEnzyme,XYZQ\nNoMotif\nAmbiguous,GANTC\nEmpty,\nEcoRI,GAATTC\n");
        assert_eq!(t.len(), 1);
        assert!(!t.contains("BadEnzyme"));
        assert!(!t.contains("Ambiguous"));
        assert!(!t.contains("Empty"));
        assert!(t.iter().all(|e| crate::enzyme::is_valid_motif(&e.motif)));
    }

    #[test]
    fn motif_is_uppercased_and_trimmed() {
        let t = parse(" SmaI ,  cccggg  \n");
        assert_eq!(t.get("SmaI"), Some("CCCGGG"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let t = parse("NotI,GCGGCCGC,8 cutter,Nocardia otitidis\n");
        assert_eq!(t.get("NotI"), Some("GCGGCCGC"));
    }

    #[test]
    fn consecutive_separators_leave_an_empty_motif() {
        assert!(parse_enzyme_line("EcoRI,,GAATTC").is_none());
        assert!(parse_enzyme_line("EcoRI,\tGAATTC").is_none());
        let t = parse("EcoRI,,GAATTC\nBamHI\t\tGGATCC\nSmaI,CCCGGG\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("SmaI"), Some("CCCGGG"));
    }

    #[test]
    fn directory_is_not_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let msg = format!("{:#}", read_enzyme_table(dir.path()).unwrap_err());
        assert!(!msg.contains("not found"), "{msg}");
        assert!(msg.contains("cannot read enzyme file"), "{msg}");
        let missing = format!("{:#}", read_enzyme_table(dir.path().join("x.csv")).unwrap_err());
        assert!(missing.contains("Enzyme file not found at"), "{missing}");
    }

    #[test]
    fn duplicate_names_last_one_wins() {
        let t = parse("EcoRI,GAATTC\nBamHI,GGATCC\nEcoRI,GGATCC\n");
        assert_eq!(t.get("EcoRI"), Some("GGATCC"));
        let names: Vec<_> = t.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["EcoRI", "BamHI"]);
    }

    #[test]
    fn invalid_redefinition_keeps_earlier_value() {
        let t = parse("EcoRI,GAATTC\nEcoRI,NNNN\n");
        assert_eq!(t.get("EcoRI"), Some("GAATTC"));
    }

    #[test]
    fn missing_file_yields_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(read_enzyme_table(&missing).is_err());
        assert!(load_enzyme_table(&missing).is_empty());
    }

    #[test]
    fn split_fields_splits_on_each_separator() {
        assert_eq!(split_fields(",GAATTC"), ["", "GAATTC"]);
        assert_eq!(split_fields("a,b,"), ["a", "b", ""]);
        assert_eq!(split_fields("a,\tb"), ["a", "", "b"]);
        assert_eq!(split_fields("solo"), ["solo"]);
    }
}
