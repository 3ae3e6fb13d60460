//! Rabin-Karp matcher.
//!
//! The modulus is intentionally tiny so that hash collisions, and therefore
//! spurious hits, show up in traces of short inputs. It is a fixed constant,
//! trading a high collision rate for observability.

// local imports
use super::{MatchResult, Recorder};
use crate::{symbols::Symbols, trace::Step};

// ---

pub const RADIX: u32 = 256;
pub const MODULUS: u32 = 101;

/// Finds all occurrences of `pattern` in `text` using a rolling hash.
///
/// Only character comparisons made while verifying a hash hit are counted.
pub fn find(text: &str, pattern: &str, case_insensitive: bool) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::default();
    }

    let text = Symbols::new(text, case_insensitive);
    let pattern = Symbols::new(pattern, case_insensitive);
    let (n, m) = (text.len(), pattern.len());

    let mut rec = Recorder::new();
    if m > n {
        return rec.finish("rabin-karp");
    }

    let weight = (1..m).fold(1, |acc, _| acc * RADIX % MODULUS);
    let pattern_hash = hash(&pattern);
    let mut window_hash = hash(&text[..m]);

    for s in 0..=n - m {
        rec.step(Step::HashCompare {
            position: s,
            window_hash,
            pattern_hash,
        });

        if window_hash == pattern_hash {
            verify(&mut rec, &text[s..s + m], &pattern, s);
        }

        if s < n - m {
            window_hash = roll(window_hash, text[s], text[s + m], weight);
        }
    }

    rec.finish("rabin-karp")
}

/// Polynomial hash of `symbols` with [`RADIX`] and [`MODULUS`].
pub fn hash(symbols: &[char]) -> u32 {
    symbols
        .iter()
        .fold(0, |acc, &ch| (RADIX * acc + u32::from(ch) % MODULUS) % MODULUS)
}

/// Slides the window hash by one position: drops `outgoing`, appends `incoming`.
///
/// `weight` is `RADIX^(m-1) mod MODULUS` for a window of length `m`.
pub fn roll(hash: u32, outgoing: char, incoming: char, weight: u32) -> u32 {
    let modulus = i64::from(MODULUS);
    let outgoing = i64::from(u32::from(outgoing));
    let incoming = i64::from(u32::from(incoming));

    let mut next = (i64::from(RADIX) * (i64::from(hash) - outgoing * i64::from(weight)) + incoming) % modulus;
    if next < 0 {
        next += modulus;
    }
    next as u32
}

fn verify(rec: &mut Recorder, window: &[char], pattern: &[char], position: usize) {
    for (k, (&actual, &expected)) in window.iter().zip(pattern).enumerate() {
        rec.count();
        if actual != expected {
            rec.step(Step::Spurious {
                position,
                pattern_index: k,
            });
            return;
        }
        rec.step(Step::Compare {
            position: position + k,
            pattern_index: k,
        });
    }

    rec.found(position);
}
