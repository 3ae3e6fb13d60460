//! Exact string matchers.
//!
//! Every matcher is a total function over its inputs: it never fails and
//! returns an empty [`MatchResult`] for an empty pattern. Besides the match
//! positions each run records an ordered trace of [`Step`]s and the number of
//! character comparisons it performed.

// std imports
use std::time::Duration;

// third-party imports
use serde::Serialize;

// local imports
use crate::{algorithm::AlgorithmId, serdex, trace::Step};

pub mod kmp;
pub mod rabin_karp;
pub mod z;

// ---

/// Signature shared by all matchers: `(text, pattern, case_insensitive)`.
pub type MatchFn = fn(&str, &str, bool) -> MatchResult;

/// Outcome of a single (algorithm, pattern) run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Start positions of all occurrences in ascending order, as `char` offsets.
    pub matches: Vec<usize>,
    pub steps: Vec<Step>,
    pub comparisons: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmId>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serdex::opt_millis")]
    pub elapsed: Option<Duration>,
}

impl MatchResult {
    /// Length of the pattern in `char`s, if the result is tagged with its pattern.
    pub fn pattern_len(&self) -> Option<usize> {
        self.pattern.as_ref().map(|p| p.chars().count())
    }

    pub fn found(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Found { position } => Some(*position),
            _ => None,
        })
    }
}

// ---

/// Append-only accumulator used by the matchers while they run.
#[derive(Default)]
struct Recorder {
    matches: Vec<usize>,
    steps: Vec<Step>,
    comparisons: u64,
}

impl Recorder {
    fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn step(&mut self, step: Step) {
        self.steps.push(step);
    }

    #[inline]
    fn count(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn found(&mut self, position: usize) {
        self.matches.push(position);
        self.steps.push(Step::Found { position });
    }

    fn finish(self, algorithm: &str) -> MatchResult {
        log::trace!(
            "{}: {} matches, {} steps, {} comparisons",
            algorithm,
            self.matches.len(),
            self.steps.len(),
            self.comparisons
        );

        MatchResult {
            matches: self.matches,
            steps: self.steps,
            comparisons: self.comparisons,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests;
