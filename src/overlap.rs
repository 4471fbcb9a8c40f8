//! Suffix-prefix overlap graphs over a set of reads.

use std::collections::BTreeMap;

/// Mapping from source read index to the reads its suffix overlaps, ascending.
pub type OverlapGraph = BTreeMap<usize, Vec<usize>>;

/// Companion mapping that records the overlap span associated with each edge.
pub type OverlapLengths = BTreeMap<usize, Vec<(usize, usize)>>;

/// Default minimum overlap, matching the assembler's minimum affix length.
pub const DEFAULT_MIN_OVERLAP: usize = 3;

/// Configuration options that govern overlap graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConfig {
    /// Shortest suffix-prefix overlap that still produces an edge.
    pub min_overlap: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }
}

impl OverlapConfig {
    pub fn build<S: AsRef<str>>(&self, sequences: &[S]) -> OverlapGraph {
        build_overlap_graph(sequences, self.min_overlap)
    }

    pub fn build_with_lengths<S: AsRef<str>>(&self, sequences: &[S]) -> OverlapLengths {
        build_overlap_lengths(sequences, self.min_overlap)
    }
}

/// Longest suffix of `s1` equal to a prefix of `s2`, if it is at least `min_len` long.
///
/// Spans are tried from `min(len1, len2)` downwards and the first hit wins.
/// Returns 0 when no span of at least `min_len` matches. A `min_len` of 0
/// is raised to 1, the empty overlap never counts.
pub fn find_overlap<T: PartialEq>(s1: &[T], s2: &[T], min_len: usize) -> usize {
    let min_len = min_len.max(1);
    let max_span = s1.len().min(s2.len());

    (min_len..=max_span)
        .rev()
        .find(|&span| s1[s1.len() - span..] == s2[..span])
        .unwrap_or(0)
}

fn collect_edges<S, F>(sequences: &[S], min_overlap: usize, mut record: F)
where
    S: AsRef<str>,
    F: FnMut(usize, usize, usize),
{
    // spans are counted in characters, not UTF-8 bytes
    let reads: Vec<Vec<char>> = sequences
        .iter()
        .map(|seq| seq.as_ref().chars().collect())
        .collect();

    for (src, suffix_read) in reads.iter().enumerate() {
        for (dst, prefix_read) in reads.iter().enumerate() {
            if src == dst {
                continue;
            }
            let span = find_overlap(suffix_read, prefix_read, min_overlap);
            if span > 0 {
                record(src, dst, span);
            }
        }
    }
}

/// Build the directed overlap graph for the supplied reads.
///
/// Every read gets a key, even when it has no successors. An edge `i -> j`
/// means a suffix of read `i` of at least `min_overlap` characters equals a
/// prefix of read `j`; it says nothing about `j -> i`. A `min_overlap` of 0
/// behaves like 1, so a zero threshold does not connect every pair: reads
/// whose junction shares no character stay unconnected.
pub fn build_overlap_graph<S: AsRef<str>>(sequences: &[S], min_overlap: usize) -> OverlapGraph {
    let mut graph: OverlapGraph = (0..sequences.len()).map(|idx| (idx, Vec::new())).collect();
    let mut edges = 0usize;

    collect_edges(sequences, min_overlap, |src, dst, _span| {
        if let Some(successors) = graph.get_mut(&src) {
            successors.push(dst);
            edges += 1;
        }
    });

    log::debug!(
        "Overlap graph over {} reads has {} edges (min overlap {})",
        sequences.len(),
        edges,
        min_overlap
    );
    graph
}

/// Same edges as [`build_overlap_graph`], each paired with its overlap span.
pub fn build_overlap_lengths<S: AsRef<str>>(sequences: &[S], min_overlap: usize) -> OverlapLengths {
    let mut lengths: OverlapLengths =
        (0..sequences.len()).map(|idx| (idx, Vec::new())).collect();

    collect_edges(sequences, min_overlap, |src, dst, span| {
        if let Some(successors) = lengths.get_mut(&src) {
            successors.push((dst, span));
        }
    });

    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_longest_overlap() {
        assert_eq!(find_overlap(b"ATCGATCG", b"TCGATCGA", 3), 7);
        assert_eq!(find_overlap(b"ACGT", b"GTAA", 2), 2);
        assert_eq!(find_overlap(b"AAAA", b"TTTT", 1), 0);
    }

    #[test]
    fn overlap_below_minimum_is_ignored() {
        assert_eq!(find_overlap(b"ACGT", b"GTAA", 3), 0);
    }

    #[test]
    fn zero_minimum_never_counts_empty_overlap() {
        assert_eq!(find_overlap(b"AAAA", b"TTTT", 0), 0);
        assert_eq!(find_overlap(b"", b"ACGT", 0), 0);
    }

    #[test]
    fn overlap_is_measured_in_characters() {
        let left: Vec<char> = "aé".chars().collect();
        let right: Vec<char> = "éb".chars().collect();
        assert_eq!(find_overlap(&left, &right, 1), 1);

        let reads = vec!["aé", "éb"];
        let graph = build_overlap_graph(&reads, 2);
        assert!(graph[&0].is_empty());
        assert_eq!(build_overlap_graph(&reads, 1)[&0], vec![1]);
        assert_eq!(build_overlap_lengths(&reads, 1)[&0], vec![(1, 1)]);
    }

    #[test]
    fn zero_minimum_does_not_link_unrelated_reads() {
        let reads = vec!["AAAA", "TTTT"];
        let graph = build_overlap_graph(&reads, 0);
        assert!(graph.values().all(Vec::is_empty));
    }

    #[test]
    fn builds_overlap_graph_for_reads() {
        let reads = vec!["ATCGATCG", "TCGATCGA", "GATCGATT"];
        let graph = build_overlap_graph(&reads, 3);

        assert_eq!(graph.len(), 3);
        assert!(graph[&0].contains(&1));
        assert!(graph[&1].iter().all(|&dst| dst != 1));
        assert!(graph.values().all(|dsts| dsts.windows(2).all(|w| w[0] < w[1])));
    }

    #[test]
    fn graph_is_directed() {
        let reads = vec!["ACGTTT".to_string(), "TTTGCA".to_string()];
        let graph = build_overlap_graph(&reads, 3);
        assert_eq!(graph[&0], vec![1]);
        assert!(graph[&1].is_empty());
    }

    #[test]
    fn reads_without_overlaps_keep_empty_lists() {
        let reads = vec!["AAAA", "TTTT", "CCCC"];
        let graph = build_overlap_graph(&reads, 2);
        assert_eq!(graph.len(), 3);
        assert!(graph.values().all(Vec::is_empty));
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let reads: Vec<String> = Vec::new();
        assert!(build_overlap_graph(&reads, 3).is_empty());
        assert!(build_overlap_graph(&reads, 0).is_empty());
    }

    #[test]
    fn lengths_carry_overlap_span() {
        let reads = vec!["ACGT", "GTAA"];
        let lengths = build_overlap_lengths(&reads, 2);
        assert_eq!(lengths[&0], vec![(1, 2)]);
        assert!(lengths[&1].is_empty());
    }

    #[test]
    fn config_defaults_to_three() {
        let config = OverlapConfig::default();
        assert_eq!(config.min_overlap, DEFAULT_MIN_OVERLAP);

        let reads = vec!["ACGT", "GTAA"];
        assert!(config.build(&reads)[&0].is_empty());
        let relaxed = OverlapConfig { min_overlap: 2 };
        assert_eq!(relaxed.build(&reads)[&0], vec![1]);
        assert_eq!(relaxed.build_with_lengths(&reads)[&0], vec![(1, 2)]);
    }
}
