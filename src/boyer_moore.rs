//! Exact pattern search with the Boyer-Moore shift rules.
//!
//! Both matchers compare right to left inside each alignment. The shift
//! tables are built once per pattern and only read during the scan.

use std::collections::HashMap;
use std::hash::Hash;

/// Last position of every symbol in the pattern, excluding the final index.
#[derive(Debug, Clone)]
pub struct BadCharTable<'a, T> {
    last: HashMap<&'a T, usize>,
}

impl<'a, T: Eq + Hash> BadCharTable<'a, T> {
    pub fn build(pattern: &'a [T]) -> Self {
        let mut last = HashMap::new();
        for (idx, symbol) in pattern.iter().enumerate().take(pattern.len().saturating_sub(1)) {
            last.insert(symbol, idx);
        }
        Self { last }
    }

    /// Highest index `< m-1` holding `symbol`, or `-1` when it never occurs there.
    #[inline]
    pub fn last_index(&self, symbol: &T) -> isize {
        self.last.get(symbol).map_or(-1, |&idx| idx as isize)
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Strong good-suffix shifts for `pattern`, indexed by mismatch position + 1.
///
/// Entry 0 is the shift applied after a full match. The table has `m + 1`
/// entries and every entry is at least 1 for a non-empty pattern.
pub fn good_suffix_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;

    // matched suffix reappears after a mismatching symbol
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // only a border of the pattern survives
    let mut j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}

/// Length of the mismatch-free suffix walk at alignment `s`.
///
/// Returns `0` on a full match, otherwise `j + 1` for mismatch index `j`.
#[inline]
fn scan_alignment<T: PartialEq>(text: &[T], pattern: &[T], s: usize) -> usize {
    let mut j = pattern.len();
    while j > 0 && pattern[j - 1] == text[s + j - 1] {
        j -= 1;
    }
    j
}

/// Exact search using only the bad-character rule.
pub fn boyer_moore_bad_char<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if n == 0 || m == 0 || m > n {
        return Vec::new();
    }

    let bad_char = BadCharTable::build(pattern);
    log::trace!("bad-character table holds {} symbols", bad_char.len());

    let mut matches = Vec::new();
    let mut s = 0usize;
    while s <= n - m {
        match scan_alignment(text, pattern, s) {
            0 => {
                matches.push(s);
                s += if s + m < n {
                    (m as isize - bad_char.last_index(&text[s + m]) - 1) as usize
                } else {
                    1
                };
            }
            j_plus_one => {
                let j = j_plus_one - 1;
                let shift = j as isize - bad_char.last_index(&text[s + j]);
                s += shift.max(1) as usize;
            }
        }
    }

    matches
}

/// Exact search taking the larger of the bad-character and good-suffix shifts.
pub fn boyer_moore_good_suffix<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if n == 0 || m == 0 || m > n {
        return Vec::new();
    }

    let bad_char = BadCharTable::build(pattern);
    let good_suffix = good_suffix_table(pattern);
    log::trace!("good-suffix table: {:?}", good_suffix);

    let mut matches = Vec::new();
    let mut s = 0usize;
    while s <= n - m {
        match scan_alignment(text, pattern, s) {
            0 => {
                matches.push(s);
                s += good_suffix[0].max(1);
            }
            j_plus_one => {
                let j = j_plus_one - 1;
                let bad_char_shift = j as isize - bad_char.last_index(&text[s + j]);
                let good_suffix_shift = good_suffix[j_plus_one] as isize;
                s += bad_char_shift.max(good_suffix_shift).max(1) as usize;
            }
        }
    }

    matches
}
