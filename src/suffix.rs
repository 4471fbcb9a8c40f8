//! Suffix array construction and the arrays derived from it.

use std::cmp::Ordering;

/// Errors returned when a caller-supplied array is not a suffix array of the text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixArrayError {
    #[error("Not a permutation: entry {index} holds {value}")]
    InvalidPermutation { index: usize, value: usize },
    #[error("Suffix array has {array} entries but the text has {text} symbols")]
    LengthMismatch { text: usize, array: usize },
}

/// Start positions of every suffix of `text`, in lexicographic suffix order.
///
/// Built by prefix doubling: suffixes are ranked by their first symbol, then
/// repeatedly re-sorted on the pair `(rank[i], rank[i + k])` with `k` doubling
/// until every rank is distinct. A suffix that runs out before `i + k` sorts
/// ahead of any that continues, which reproduces plain lexicographic order.
pub fn build_suffix_array<T: Ord>(text: &[T]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sa: Vec<usize> = (0..n).collect();
    sa.sort_by(|&a, &b| text[a].cmp(&text[b]));

    let mut rank = vec![0usize; n];
    for w in 1..n {
        rank[sa[w]] = rank[sa[w - 1]] + usize::from(text[sa[w - 1]] != text[sa[w]]);
    }

    let mut next = vec![0usize; n];
    let mut k = 1usize;
    while rank[sa[n - 1]] + 1 < n {
        let key = |i: usize| (rank[i], rank.get(i + k).copied());
        sa.sort_by_key(|&i| key(i));

        next[sa[0]] = 0;
        for w in 1..n {
            next[sa[w]] = next[sa[w - 1]] + usize::from(key(sa[w - 1]) != key(sa[w]));
        }
        std::mem::swap(&mut rank, &mut next);
        k *= 2;
    }

    log::trace!("suffix array over {} symbols settled at k = {}", n, k);
    sa
}

/// Suffix array built by sorting the suffixes themselves.
///
/// O(n^2 log n). Kept as the reference ordering for [`build_suffix_array`].
pub fn build_suffix_array_naive<T: Ord>(text: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Rank of each text position, so that `isa[sa[i]] == i`.
///
/// Fails fast when `sa` is not a permutation of `0..sa.len()`.
pub fn inverse_suffix_array(sa: &[usize]) -> Result<Vec<usize>, SuffixArrayError> {
    let n = sa.len();
    let mut isa = vec![usize::MAX; n];
    for (index, &value) in sa.iter().enumerate() {
        if value >= n || isa[value] != usize::MAX {
            return Err(SuffixArrayError::InvalidPermutation { index, value });
        }
        isa[value] = index;
    }
    Ok(isa)
}

/// Longest common prefix of each suffix with its predecessor in `sa`.
///
/// Kasai's linear-time scan. `lcp[0]` is always 0.
pub fn lcp_array<T: PartialEq>(text: &[T], sa: &[usize]) -> Result<Vec<usize>, SuffixArrayError> {
    if text.len() != sa.len() {
        return Err(SuffixArrayError::LengthMismatch {
            text: text.len(),
            array: sa.len(),
        });
    }
    let isa = inverse_suffix_array(sa)?;
    Ok(kasai(text, sa, &isa))
}

fn kasai<T: PartialEq>(text: &[T], sa: &[usize], isa: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];
    let mut h = 0usize;

    for i in 0..n {
        let rank = isa[i];
        if rank == 0 {
            h = 0;
            continue;
        }
        let j = sa[rank - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[rank] = h;
        h = h.saturating_sub(1);
    }

    lcp
}

/// A text together with its suffix array and inverse.
#[derive(Debug, Clone)]
pub struct SuffixIndex<'a, T> {
    text: &'a [T],
    sa: Vec<usize>,
    isa: Vec<usize>,
}

impl<'a, T: Ord> SuffixIndex<'a, T> {
    pub fn build(text: &'a [T]) -> Self {
        let sa = build_suffix_array(text);
        let mut isa = vec![0usize; sa.len()];
        for (rank, &pos) in sa.iter().enumerate() {
            isa[pos] = rank;
        }
        Self { text, sa, isa }
    }

    pub fn text(&self) -> &'a [T] {
        self.text
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    pub fn inverse(&self) -> &[usize] {
        &self.isa
    }

    pub fn lcp(&self) -> Vec<usize> {
        kasai(self.text, &self.sa, &self.isa)
    }

    /// All start positions of `pattern`, ascending.
    ///
    /// Suffixes that begin with the pattern form one contiguous block of the
    /// suffix array; its bounds are found by two binary searches.
    pub fn find_occurrences(&self, pattern: &[T]) -> Vec<usize> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let head = |start: usize| {
            let end = (start + pattern.len()).min(self.text.len());
            self.text[start..end].cmp(pattern)
        };
        let lo = self.sa.partition_point(|&s| head(s) == Ordering::Less);
        let hi = self.sa.partition_point(|&s| head(s) != Ordering::Greater);

        let mut positions = self.sa[lo..hi].to_vec();
        positions.sort_unstable();
        positions
    }

    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }
}
