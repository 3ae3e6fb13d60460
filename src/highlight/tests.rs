use super::*;
use crate::matcher::{kmp, z};

use Segment::{Highlighted as H, Plain as P};

fn tagged(mut result: MatchResult, pattern: &str) -> MatchResult {
    result.pattern = Some(pattern.into());
    result
}

#[test]
fn test_spans_descending() {
    let result = kmp::find("abababcabababcabcabc", "abc", false);
    assert_eq!(spans(&result, 3), vec![17..20, 14..17, 11..14, 4..7]);
}

#[test]
fn test_segments_keep_original_casing() {
    let result = tagged(z::find("ABCabc xABC", "abc", true), "abc");
    assert_eq!(
        segments("ABCabc xABC", &result),
        vec![H("ABC"), H("abc"), P(" x"), H("ABC")]
    );
}

#[test]
fn test_segments_of_overlapping_matches() {
    let result = tagged(kmp::find("baaaab", "aa", false), "aa");
    assert_eq!(spans(&result, 2), vec![3..5, 2..4, 1..3]);
    assert_eq!(segments("baaaab", &result), vec![P("b"), H("aaaa"), P("b")]);
}

#[test]
fn test_segments_without_pattern() {
    let result = kmp::find("abc", "b", false);
    assert_eq!(segments("abc", &result), vec![P("abc")]);
}

#[test]
fn test_segments_of_back_to_back_matches() {
    let result = tagged(kmp::find("abcabc", "abc", false), "abc");
    assert_eq!(segments("abcabc", &result), vec![H("abc"), H("abc")]);
}
