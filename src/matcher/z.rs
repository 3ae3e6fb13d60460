//! Z-algorithm matcher.

// std imports
use std::iter::once;

// local imports
use super::{MatchResult, Recorder};
use crate::{symbols::Symbols, trace::Step};

// ---

/// Finds all occurrences of `pattern` in `text` by computing the Z-array of
/// `pattern + separator + text`.
///
/// Only successful extensions of a Z-value are counted as comparisons.
pub fn find(text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::default();
    }

    let text = Symbols::new(text, case_insensitive);
    let pattern = Symbols::new(pattern, case_insensitive);
    let m = pattern.len();

    let combined: Vec<Symbol> = pattern
        .iter()
        .copied()
        .map(Symbol::Char)
        .chain(once(Symbol::Separator))
        .chain(text.iter().copied().map(Symbol::Char))
        .collect();
    let n = combined.len();

    let mut rec = Recorder::new();
    let mut z = vec![0; n];
    let (mut left, mut right) = (0, 0);

    for i in 1..n {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
            rec.step(Step::ZBox {
                position: i,
                mirror: i - left,
                z: z[i],
            });
        }

        while i + z[i] < n && combined[z[i]] == combined[i + z[i]] {
            z[i] += 1;
            rec.count();
            rec.step(Step::Extend { position: i, z: z[i] });
        }

        if z[i] > 0 && i + z[i] > right {
            left = i;
            right = i + z[i];
            rec.step(Step::UpdateBox {
                position: i,
                left,
                right,
            });
        }

        if i > m && z[i] == m {
            rec.found(i - m - 1);
        }
    }

    rec.finish("z-algorithm")
}

// ---

/// Element of the combined buffer.
///
/// The separator is a distinct variant rather than a reserved character, so it
/// can never be equal to anything in the pattern or the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Char(char),
    Separator,
}

#[cfg(test)]
mod tests;
