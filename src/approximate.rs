//! Approximate pattern search driven by the distance metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::{edit_distance, hamming_distance};

/// Distance used to score a text window against the pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// Substitutions only; every window has the pattern's length.
    Hamming,
    /// Levenshtein distance over windows whose length may differ from the pattern.
    #[default]
    Edit,
}

impl DistanceMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a distance method name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown distance method '{0}' (expected 'hamming' or 'edit')")]
pub struct MethodParseError(pub String);

impl FromStr for DistanceMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamming" => Ok(Self::Hamming),
            "edit" | "levenshtein" => Ok(Self::Edit),
            _ => Err(MethodParseError(s.to_string())),
        }
    }
}

/// Tuning parameters for an approximate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproximateQuery {
    /// Largest distance at which a window still counts as a match.
    pub max_dist: usize,
    /// Metric used to score each window.
    pub method: DistanceMethod,
}

impl Default for ApproximateQuery {
    fn default() -> Self {
        Self {
            max_dist: 1,
            method: DistanceMethod::default(),
        }
    }
}

impl ApproximateQuery {
    /// Run the query against `text`.
    pub fn find<T: PartialEq>(&self, text: &[T], pattern: &[T]) -> Vec<usize> {
        find_approximate_matches(text, pattern, self.max_dist, self.method)
    }
}

/// Report every start position in `text` where `pattern` occurs within `max_dist`.
///
/// With [`DistanceMethod::Hamming`] each window is exactly `pattern.len()`
/// symbols. With [`DistanceMethod::Edit`] the window length ranges over
/// `max(1, m - max_dist) ..= min(n - i, m + max_dist)` and a position is
/// accepted at the first window that satisfies the threshold. Later, possibly
/// closer, windows for the same position are not examined.
///
/// Positions are returned in ascending order. An empty pattern, or a pattern
/// longer than the text, yields no matches.
pub fn find_approximate_matches<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    max_dist: usize,
    method: DistanceMethod,
) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return Vec::new();
    }

    let mut matches = Vec::new();
    match method {
        DistanceMethod::Hamming => {
            for i in 0..=n - m {
                // windows are built at pattern length, the metric cannot fail here
                let within = hamming_distance(&text[i..i + m], pattern)
                    .map(|distance| distance <= max_dist)
                    .unwrap_or(false);
                if within {
                    matches.push(i);
                }
            }
        }
        DistanceMethod::Edit => {
            let min_window = m.saturating_sub(max_dist).max(1);
            for i in 0..=n - m {
                let max_window = (n - i).min(m.saturating_add(max_dist));
                let hit = (min_window..=max_window)
                    .any(|window| edit_distance(&text[i..i + window], pattern) <= max_dist);
                if hit {
                    matches.push(i);
                }
            }
        }
    }

    log::trace!(
        "{} search for pattern of length {} (max_dist {}) found {} positions",
        method,
        m,
        max_dist,
        matches.len()
    );
    matches
}
