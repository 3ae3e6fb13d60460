//! Exact string matching with the Knuth-Morris-Pratt, Rabin-Karp and Z
//! algorithms.
//!
//! Every matcher returns the match positions together with an ordered trace of
//! the steps it took and the number of character comparisons it performed.
//!
//! ```
//! use strmatch::{AlgorithmId, find};
//!
//! let result = find(AlgorithmId::Kmp, "abababcabababcabcabc", "ababc", false);
//! assert_eq!(result.matches, vec![2, 9]);
//! ```

// public modules
pub mod algorithm;
pub mod appdirs;
pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod output;
pub mod playback;
pub mod registry;
pub mod run;
pub mod settings;
pub mod symbols;
pub mod trace;
pub mod xerr;

// private modules
mod serdex;

// public uses
pub use algorithm::{AlgorithmId, Selection};
pub use matcher::MatchResult;
pub use run::{Request, RunResultSet};
pub use settings::Settings;
pub use trace::{Step, StepKind};

/// Runs a single algorithm over `text` looking for `pattern`.
pub fn find(algorithm: AlgorithmId, text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
    registry::get(algorithm).find(text, pattern, case_insensitive)
}
