//! Static table of the available matching algorithms.
//!
//! Adding an algorithm means adding an [`AlgorithmId`] variant and an entry here.

// third-party imports
use enum_map::{EnumMap, enum_map};
use once_cell::sync::Lazy;

// local imports
use crate::{
    algorithm::AlgorithmId,
    matcher::{MatchFn, MatchResult, kmp, rabin_karp, z},
};

// ---

pub struct AlgorithmDescriptor {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub matcher: MatchFn,
    pub description: &'static str,
}

impl AlgorithmDescriptor {
    #[inline]
    pub fn find(&self, text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
        (self.matcher)(text, pattern, case_insensitive)
    }
}

static REGISTRY: Lazy<EnumMap<AlgorithmId, AlgorithmDescriptor>> = Lazy::new(|| {
    enum_map! {
        AlgorithmId::Kmp => AlgorithmDescriptor {
            id: AlgorithmId::Kmp,
            name: "Knuth-Morris-Pratt",
            matcher: kmp::find,
            description: "Precomputes a failure function so the text is never re-scanned; O(n + m).",
        },
        AlgorithmId::RabinKarp => AlgorithmDescriptor {
            id: AlgorithmId::RabinKarp,
            name: "Rabin-Karp",
            matcher: rabin_karp::find,
            description: "Compares rolling hashes of text windows and verifies hash hits character by character.",
        },
        AlgorithmId::ZAlgorithm => AlgorithmDescriptor {
            id: AlgorithmId::ZAlgorithm,
            name: "Z-Algorithm",
            matcher: z::find,
            description: "Computes the Z-array of pattern, separator and text using a sliding match box; O(n + m).",
        },
    }
});

pub fn get(id: AlgorithmId) -> &'static AlgorithmDescriptor {
    &REGISTRY[id]
}

/// All registered algorithms in identifier order.
pub fn all() -> impl Iterator<Item = &'static AlgorithmDescriptor> {
    REGISTRY.values()
}
