//! Pairwise distance metrics over symbol sequences.

/// Errors returned by the distance metrics.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("Hamming distance requires equal lengths (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Count the aligned positions at which two equal-length sequences differ.
pub fn hamming_distance<T: PartialEq>(s1: &[T], s2: &[T]) -> Result<usize, DistanceError> {
    if s1.len() != s2.len() {
        return Err(DistanceError::LengthMismatch {
            left: s1.len(),
            right: s2.len(),
        });
    }

    Ok(s1.iter().zip(s2).filter(|(a, b)| a != b).count())
}

/// Levenshtein distance computed over the full `(m+1) x (n+1)` table.
///
/// Insertions, deletions and substitutions all cost one. O(mn) time and
/// space, sized for patterns and reads rather than whole chromosomes.
pub fn edit_distance<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    let m = s1.len();
    let n = s2.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_counts_mismatches() {
        assert_eq!(hamming_distance(b"ATCG", b"ATCG"), Ok(0));
        assert_eq!(hamming_distance(b"ATCG", b"ATCC"), Ok(1));
        assert_eq!(hamming_distance(b"ATCG", b"CGTA"), Ok(4));
        assert_eq!(hamming_distance::<u8>(b"", b""), Ok(0));
    }

    #[test]
    fn hamming_rejects_unequal_lengths() {
        let err = hamming_distance(b"ATCG", b"ATC").unwrap_err();
        assert_eq!(err, DistanceError::LengthMismatch { left: 4, right: 3 });
    }

    #[test]
    fn hamming_works_on_non_byte_symbols() {
        let a = ["alpha", "beta", "gamma"];
        let b = ["alpha", "delta", "gamma"];
        assert_eq!(hamming_distance(&a, &b), Ok(1));
    }

    #[test]
    fn edit_distance_single_edits() {
        assert_eq!(edit_distance(b"ATCG", b"ATCG"), 0);
        assert_eq!(edit_distance(b"ATC", b"ATCG"), 1);
        assert_eq!(edit_distance(b"ATCG", b"ATC"), 1);
        assert_eq!(edit_distance(b"ATCG", b"ATCC"), 1);
    }

    #[test]
    fn edit_distance_kitten_sitting() {
        assert_eq!(edit_distance(b"KITTEN", b"SITTING"), 3);
    }

    #[test]
    fn edit_distance_against_empty() {
        assert_eq!(edit_distance::<u8>(b"", b""), 0);
        assert_eq!(edit_distance(b"ABC", b""), 3);
        assert_eq!(edit_distance(b"", b"ABC"), 3);
    }
}
