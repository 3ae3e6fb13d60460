// std imports
use std::ops::Range;

// re-exports
pub use textspan::Segment;

// local imports
use crate::matcher::MatchResult;

// ---

/// Highlight spans `[position, position + pattern_len)` of all matches, as
/// `char` offsets into the original text, sorted by descending start.
///
/// Processing spans in this order lets a renderer annotate the text in place
/// without shifting offsets of spans not yet processed.
pub fn spans(result: &MatchResult, pattern_len: usize) -> Vec<Range<usize>> {
    let mut spans: Vec<_> = result
        .matches
        .iter()
        .map(|&position| position..position + pattern_len)
        .collect();
    spans.sort_by(|a, b| b.start.cmp(&a.start));
    spans
}

/// Splits the original text into ordered plain and highlighted segments for all matches of `result`.
///
/// The pattern length is taken from the pattern `result` is tagged with, an untagged result has nothing to highlight.
pub fn segments<'a>(text: &'a str, result: &MatchResult) -> Vec<Segment<'a>> {
    let pattern_len = result.pattern_len().unwrap_or(0);
    textspan::segments(text, spans(result, pattern_len))
}

#[cfg(test)]
mod tests;
