//! Run orchestration: validates the input, drives the selected matchers over
//! every pattern and assembles a fresh result set.

// std imports
use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

// third-party imports
use serde::Serialize;

// local imports
use crate::{
    algorithm::{AlgorithmId, Selection},
    error::{InputError, Result},
    matcher::MatchResult,
    registry::{self, AlgorithmDescriptor},
    serdex,
};

// ---

pub const PATTERN_SEPARATOR: char = ',';

/// Splits a pattern list on [`PATTERN_SEPARATOR`], trims every entry and drops empty ones.
pub fn parse_patterns(list: &str) -> Vec<String> {
    list.split(PATTERN_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    pub text: &'a str,
    /// Raw, comma-separated pattern list.
    pub patterns: &'a str,
    pub selection: Selection,
    pub case_insensitive: bool,
}

impl<'a> Request<'a> {
    /// Builds a request from a textual algorithm identifier, `all` selects benchmark mode.
    pub fn parse(text: &'a str, patterns: &'a str, algorithm: &str, case_insensitive: bool) -> Result<Self> {
        Ok(Self {
            text,
            patterns,
            selection: algorithm.parse()?,
            case_insensitive,
        })
    }
}

// ---

/// Results of a single run. Each run produces a new set, sets are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "results", rename_all = "kebab-case")]
pub enum RunResultSet {
    /// One result per pattern, indexed by the pattern's position in the list.
    Patterns(Vec<MatchResult>),
    /// One aggregate per algorithm, step traces are not kept.
    Benchmark(BTreeMap<AlgorithmId, BenchmarkResult>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: AlgorithmId,
    pub patterns: usize,
    pub matches: usize,
    pub comparisons: u64,
    #[serde(serialize_with = "serdex::millis")]
    pub elapsed: Duration,
}

// ---

/// Runs the request.
///
/// Input is validated before any matcher executes, so a failed validation
/// never produces partial results.
pub fn run(request: &Request) -> Result<RunResultSet> {
    let patterns = validate(request)?;

    log::debug!(
        "running {} on {} chars with {} pattern(s), case insensitive: {}",
        request.selection,
        request.text.chars().count(),
        patterns.len(),
        request.case_insensitive
    );

    Ok(match request.selection {
        Selection::Single(id) => RunResultSet::Patterns(
            patterns
                .iter()
                .map(|pattern| single(registry::get(id), request.text, pattern, request.case_insensitive))
                .collect(),
        ),
        Selection::All => RunResultSet::Benchmark(
            registry::all()
                .map(|descriptor| {
                    let result = benchmark(descriptor, request.text, &patterns, request.case_insensitive);
                    (descriptor.id, result)
                })
                .collect(),
        ),
    })
}

fn validate(request: &Request) -> std::result::Result<Vec<String>, InputError> {
    if request.text.is_empty() {
        log::warn!("rejecting run: empty text");
        return Err(InputError::EmptyText);
    }

    let patterns = parse_patterns(request.patterns);
    if patterns.is_empty() {
        log::warn!("rejecting run: no patterns in {:?}", request.patterns);
        return Err(InputError::NoPatterns(request.patterns.into()));
    }

    Ok(patterns)
}

fn single(descriptor: &AlgorithmDescriptor, text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
    let start = Instant::now();
    let result = descriptor.find(text, pattern, case_insensitive);
    let elapsed = start.elapsed();

    log::debug!(
        "{} {:?}: {} matches, {} comparisons in {:?}",
        descriptor.id,
        pattern,
        result.matches.len(),
        result.comparisons,
        elapsed
    );

    MatchResult {
        pattern: Some(pattern.into()),
        algorithm: Some(descriptor.id),
        elapsed: Some(elapsed),
        ..result
    }
}

fn benchmark(descriptor: &AlgorithmDescriptor, text: &str, patterns: &[String], case_insensitive: bool) -> BenchmarkResult {
    let mut matches = 0;
    let mut comparisons = 0;

    let start = Instant::now();
    for pattern in patterns {
        let result = descriptor.find(text, pattern, case_insensitive);
        matches += result.matches.len();
        comparisons += result.comparisons;
    }
    let elapsed = start.elapsed();

    log::debug!(
        "{}: {} matches, {} comparisons in {:?}",
        descriptor.id,
        matches,
        comparisons,
        elapsed
    );

    BenchmarkResult {
        algorithm: descriptor.id,
        patterns: patterns.len(),
        matches,
        comparisons,
        elapsed,
    }
}
