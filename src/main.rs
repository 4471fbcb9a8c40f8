use log::{debug, info};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use genestudio::{
    boyer_moore_bad_char, boyer_moore_good_suffix, edit_distance,
    find_approximate_matches, hamming_distance, ApproximateQuery, DistanceMethod, OverlapConfig,
    SuffixIndex,
};

/// GeneStudio string algorithms on the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', alias = "info", global = true)]
    verbose: bool,

    /// Debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Trace output
    #[arg(long, global = true)]
    trace: bool,

    /// Print compact JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hamming distance between two equal-length sequences
    Hamming { first: String, second: String },

    /// Levenshtein distance between two sequences
    Edit { first: String, second: String },

    /// Start positions where PATTERN occurs in TEXT within a distance threshold
    Approx {
        text: String,
        pattern: String,

        /// Largest accepted distance
        #[arg(long, default_value_t = ApproximateQuery::default().max_dist)]
        max_dist: usize,

        /// Distance metric: hamming or edit
        #[arg(long, default_value_t = DistanceMethod::default())]
        method: DistanceMethod,
    },

    /// Exact Boyer-Moore search for PATTERN in TEXT
    Search {
        text: String,
        pattern: String,

        /// Combine the good-suffix rule with the bad-character rule
        #[arg(long)]
        good_suffix: bool,
    },

    /// Suffix array, inverse suffix array and LCP array of TEXT
    SuffixArray {
        text: String,

        /// Also report occurrences of this pattern through the suffix array
        #[arg(long)]
        find: Option<String>,
    },

    /// Directed suffix-prefix overlap graph over the given sequences
    Overlap {
        sequences: Vec<String>,

        /// Minimum overlap length for an edge
        #[arg(long, default_value_t = OverlapConfig::default().min_overlap)]
        min_overlap: usize,

        /// Include the overlap span of every edge
        #[arg(long)]
        with_lengths: bool,
    },
}

fn main() {
    let args = Args::parse();
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "error"
    };
    env_logger::Builder::new().parse_filters(log_level).init();

    match execute(&args.command) {
        Ok(output) => {
            let rendered = if args.compact {
                serde_json::to_string(&output)
            } else {
                serde_json::to_string_pretty(&output)
            };
            match rendered {
                Ok(text) => println!("{text}"),
                Err(error) => {
                    eprintln!("Failed to render output: {error:?}");
                    std::process::exit(1);
                }
            }
        }
        Err(error) => {
            eprintln!("Command failed: {error:?}");
            std::process::exit(1);
        }
    }
}

/// Positions and lengths reported by the CLI count characters, not UTF-8 bytes.
fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn execute(command: &Command) -> Result<Value> {
    match command {
        Command::Hamming { first, second } => {
            let (first, second) = (symbols(first), symbols(second));
            let distance = hamming_distance(&first, &second)
                .context("Failed to compute Hamming distance")?;
            info!("Hamming distance over {} symbols: {}", first.len(), distance);
            Ok(json!({ "distance": distance }))
        }
        Command::Edit { first, second } => {
            let (first, second) = (symbols(first), symbols(second));
            let distance = edit_distance(&first, &second);
            info!(
                "Edit distance (len {} vs {}): {}",
                first.len(),
                second.len(),
                distance
            );
            Ok(json!({ "distance": distance }))
        }
        Command::Approx {
            text,
            pattern,
            max_dist,
            method,
        } => {
            let query = ApproximateQuery {
                max_dist: *max_dist,
                method: *method,
            };
            debug!("Approximate query: {:?}", query);
            let positions = find_approximate_matches(
                &symbols(text),
                &symbols(pattern),
                query.max_dist,
                query.method,
            );
            info!("{} approximate matches found", positions.len());
            Ok(json!({ "method": query.method, "max_dist": query.max_dist, "positions": positions }))
        }
        Command::Search {
            text,
            pattern,
            good_suffix,
        } => {
            let (text, pattern) = (symbols(text), symbols(pattern));
            let positions = if *good_suffix {
                boyer_moore_good_suffix(&text, &pattern)
            } else {
                boyer_moore_bad_char(&text, &pattern)
            };
            info!("{} exact matches found", positions.len());
            Ok(json!({ "positions": positions }))
        }
        Command::SuffixArray { text, find } => {
            let text = symbols(text);
            let index = SuffixIndex::build(&text);
            info!("Suffix array built over {} symbols", index.len());
            let mut output = json!({
                "suffix_array": index.suffix_array(),
                "inverse": index.inverse(),
                "lcp": index.lcp(),
            });
            if let Some(pattern) = find {
                output["positions"] = json!(index.find_occurrences(&symbols(pattern)));
            }
            Ok(output)
        }
        Command::Overlap {
            sequences,
            min_overlap,
            with_lengths,
        } => {
            let config = OverlapConfig {
                min_overlap: *min_overlap,
            };
            info!("Creating overlap graph over {} sequences...", sequences.len());
            if *with_lengths {
                let lengths = config.build_with_lengths(sequences);
                let edges: Vec<Value> = lengths
                    .iter()
                    .flat_map(|(src, dsts)| {
                        dsts.iter().map(move |(dst, span)| {
                            json!({ "source": src, "target": dst, "overlap": span })
                        })
                    })
                    .collect();
                Ok(json!({ "nodes": sequences.len(), "edges": edges }))
            } else {
                let graph = config.build(sequences);
                Ok(json!({ "graph": graph }))
            }
        }
    }
}

#[cfg(test)]
mod smoke {
    use super::*;

    #[test]
    fn edit_command_reports_distance() {
        let command = Command::Edit {
            first: "KITTEN".to_string(),
            second: "SITTING".to_string(),
        };
        let output = execute(&command).expect("edit distance");
        assert_eq!(output["distance"], 3);
    }

    #[test]
    fn hamming_command_fails_on_length_mismatch() {
        let command = Command::Hamming {
            first: "ATCG".to_string(),
            second: "ATC".to_string(),
        };
        assert!(execute(&command).is_err());
    }

    #[test]
    fn approx_command_uses_method() {
        let command = Command::Approx {
            text: "ATCGATCGATCG".to_string(),
            pattern: "ATC".to_string(),
            max_dist: 0,
            method: DistanceMethod::Hamming,
        };
        let output = execute(&command).expect("approximate search");
        assert_eq!(output["positions"], json!([0, 4, 8]));
        assert_eq!(output["method"], "hamming");
    }

    #[test]
    fn search_positions_count_characters() {
        for good_suffix in [false, true] {
            let command = Command::Search {
                text: "éATCéATC".to_string(),
                pattern: "ATC".to_string(),
                good_suffix,
            };
            let output = execute(&command).expect("exact search");
            assert_eq!(output["positions"], json!([1, 5]));
        }

        let command = Command::Approx {
            text: "éATC".to_string(),
            pattern: "ATC".to_string(),
            max_dist: 0,
            method: DistanceMethod::Edit,
        };
        let output = execute(&command).expect("approximate search");
        assert_eq!(output["positions"], json!([1]));
    }

    #[test]
    fn suffix_array_command_reports_arrays() {
        let command = Command::SuffixArray {
            text: "banana".to_string(),
            find: Some("ana".to_string()),
        };
        let output = execute(&command).expect("suffix array");
        assert_eq!(output["suffix_array"], json!([5, 3, 1, 0, 4, 2]));
        assert_eq!(output["lcp"], json!([0, 1, 3, 0, 0, 2]));
        assert_eq!(output["positions"], json!([1, 3]));
    }

    #[test]
    fn overlap_command_keys_every_sequence() {
        let command = Command::Overlap {
            sequences: vec!["ACGT".to_string(), "GTAA".to_string()],
            min_overlap: 2,
            with_lengths: false,
        };
        let output = execute(&command).expect("overlap graph");
        assert_eq!(output["graph"], json!({ "0": [1], "1": [] }));
    }

    #[test]
    fn cli_parses_subcommands() {
        let args = Args::try_parse_from([
            "genestudio",
            "approx",
            "ACGT",
            "CG",
            "--method",
            "hamming",
            "--max-dist",
            "0",
        ])
        .expect("valid arguments");
        assert!(matches!(
            args.command,
            Command::Approx {
                method: DistanceMethod::Hamming,
                max_dist: 0,
                ..
            }
        ));
    }
}
