//! Fragment splitting and the [`Digest`] result bundle.
//!
//! Cut positions are 1-based and are used directly as 0-based slice
//! boundaries, so a site at position `p` ends the previous fragment after
//! `p` bases. The sequence length is always the final boundary.
use crate::enzyme::{CutSite, Fragment};
use crate::seqio::Sequence;

/// Compute fragment ranges for a sequence of length `len`.
///
/// Positions are deduplicated and sorted; positions past `len` are clamped to it.
///
/// # Examples
/// ```
/// use redigest::digest::fragment_bounds;
/// let f = fragment_bounds(15, [10, 1, 10]);
/// let lens: Vec<_> = f.iter().map(|f| f.len()).collect();
/// assert_eq!(lens, [1, 9, 5]);
/// ```
pub fn fragment_bounds<I>(len: usize, positions: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = usize>,
{
    let mut cuts: Vec<usize> = positions.into_iter().map(|p| p.min(len)).collect();
    cuts.sort_unstable();
    cuts.dedup();
    cuts.push(len);

    let mut start = 0;
    let mut out = Vec::with_capacity(cuts.len());
    for end in cuts {
        out.push(Fragment { start, end });
        start = end;
    }
    out
}

/// Split `seq` into fragment slices at the given 1-based cut positions.
///
/// Concatenating the result always reproduces `seq`.
pub fn split_fragments<I>(seq: &str, positions: I) -> Vec<&str>
where
    I: IntoIterator<Item = usize>,
{
    fragment_bounds(seq.len(), positions).iter().map(|f| f.slice(seq)).collect()
}

/// Everything a report needs from one digest run.
#[derive(Clone, Debug)]
pub struct Digest {
    /// The digested sequence.
    pub sequence: Sequence,
    /// Cut sites sorted by position (stable with respect to table order).
    pub cut_sites: Vec<CutSite>,
    /// Fragments over the distinct cut positions; empty when there are no cut sites.
    pub fragments: Vec<Fragment>,
}

impl Digest {
    pub fn new(sequence: Sequence, cut_sites: Vec<CutSite>) -> Self {
        let fragments = if cut_sites.is_empty() {
            Vec::new()
        } else {
            fragment_bounds(sequence.len(), cut_sites.iter().map(|s| s.position))
        };
        Digest { sequence, cut_sites, fragments }
    }

    pub fn fragment_lengths(&self) -> Vec<usize> { self.fragments.iter().map(Fragment::len).collect() }

    /// Borrow each fragment's bases.
    pub fn fragment_sequences(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.slice(self.sequence.as_str())).collect()
    }
}

#[cfg(test)]
mod digest_tests {
    use super::*;

    #[test]
    fn splits_at_distinct_sorted_positions() {
        let seq = "GAATTCAAAGAATTC";
        assert_eq!(split_fragments(seq, [10, 1]), ["G", "AATTCAAAG", "AATTC"]);
    }

    #[test]
    fn no_positions_gives_whole_sequence() {
        assert_eq!(split_fragments("ACGT", []), ["ACGT"]);
        assert_eq!(split_fragments("", []), [""]);
    }

    #[test]
    fn boundary_positions_give_empty_fragments() {
        assert_eq!(split_fragments("ACGT", [0]), ["", "ACGT"]);
        assert_eq!(split_fragments("ACGT", [4]), ["ACGT", ""]);
        assert_eq!(split_fragments("ACGT", [0, 4]), ["", "ACGT", ""]);
    }

    #[test]
    fn positions_past_the_end_are_clamped() {
        assert_eq!(split_fragments("ACGT", [10]), ["ACGT", ""]);
        assert_eq!(split_fragments("ACGT", [2, 9, 99]), ["AC", "GT", ""]);
    }

    #[test]
    fn fragments_always_reassemble_the_sequence() {
        let seq = "GGATCCAAGCTTGAATTCNN".replace('N', "A");
        let cases: Vec<Vec<usize>> = vec![
            vec![],
            vec![0],
            vec![seq.len()],
            vec![3, 3, 3],
            vec![19, 1, 7, 7, 0, 12],
            (0..=seq.len()).collect(),
        ];
        for cuts in cases {
            let frags = split_fragments(&seq, cuts.iter().copied());
            assert_eq!(frags.concat(), seq, "cuts {cuts:?}");
        }
    }

    #[test]
    fn digest_without_sites_has_no_fragments() {
        let d = Digest::new(Sequence::normalize("ACGT"), Vec::new());
        assert!(d.fragments.is_empty());
    }

    #[test]
    fn digest_uses_distinct_site_positions() {
        let sites = vec![CutSite::new("A", 3), CutSite::new("B", 3), CutSite::new("C", 5)];
        let d = Digest::new(Sequence::normalize("ACGTACGT"), sites);
        assert_eq!(d.fragment_lengths(), [3, 2, 3]);
        assert_eq!(d.fragment_sequences(), ["ACG", "TA", "CGT"]);
    }
}
