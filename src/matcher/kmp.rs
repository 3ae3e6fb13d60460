//! Knuth-Morris-Pratt matcher.

// local imports
use super::{MatchResult, Recorder};
use crate::{symbols::Symbols, trace::Step};

// ---

/// Finds all, possibly overlapping, occurrences of `pattern` in `text`.
///
/// While searching, every failure-function fallback and the final comparison at
/// each text index count as one comparison each. While building the failure
/// function, every loop iteration counts as one, including an iteration that
/// compares, mismatches and falls back.
pub fn find(text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::default();
    }

    let text = Symbols::new(text, case_insensitive);
    let pattern = Symbols::new(pattern, case_insensitive);
    let m = pattern.len();

    let mut rec = Recorder::new();
    let failure = failure_function(&pattern, &mut rec);

    let mut j = 0;
    for (i, &ch) in text.iter().enumerate() {
        while j > 0 && ch != pattern[j] {
            rec.step(Step::Mismatch {
                position: i,
                pattern_index: j,
                shift: Some(j - failure[j - 1]),
            });
            j = failure[j - 1];
            rec.count();
        }

        rec.count();
        if ch == pattern[j] {
            rec.step(Step::Match {
                position: i,
                pattern_index: j,
            });
            j += 1;
        } else {
            rec.step(Step::Mismatch {
                position: i,
                pattern_index: j,
                shift: None,
            });
        }

        if j == m {
            rec.found(i + 1 - m);
            j = failure[j - 1];
        }
    }

    rec.finish("kmp")
}

/// For every prefix `pattern[..=i]` computes the length of its longest proper
/// prefix that is also its suffix.
fn failure_function(pattern: &[char], rec: &mut Recorder) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        rec.count();
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len > 0 {
            len = failure[len - 1];
        } else {
            i += 1;
        }
    }

    failure
}
