//! genestudio library
//!
//! Classical string algorithms for DNA text: distance metrics, approximate and
//! Boyer-Moore exact matching, suffix arrays and suffix-prefix overlap graphs.
//! Everything here is a pure function over in-memory slices; parsing reads,
//! rendering results and scheduling work are left to the caller.

pub mod approximate;
pub mod boyer_moore;
pub mod distance;
pub mod overlap;
pub mod suffix;

pub use approximate::{
    find_approximate_matches,
    ApproximateQuery,
    DistanceMethod,
    MethodParseError,
};
pub use boyer_moore::{
    boyer_moore_bad_char,
    boyer_moore_good_suffix,
    good_suffix_table,
    BadCharTable,
};
pub use distance::{edit_distance, hamming_distance, DistanceError};
pub use overlap::{
    build_overlap_graph,
    build_overlap_lengths,
    find_overlap,
    OverlapConfig,
    OverlapGraph,
    OverlapLengths,
    DEFAULT_MIN_OVERLAP,
};
pub use suffix::{
    build_suffix_array,
    build_suffix_array_naive,
    inverse_suffix_array,
    lcp_array,
    SuffixArrayError,
    SuffixIndex,
};
