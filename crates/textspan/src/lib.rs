//! Splitting text into plain and highlighted segments.
//!
//! Spans are given as `char` offsets into the original text, which is what the
//! matchers report. Overlapping spans are merged so the resulting segments
//! never overlap and can be rendered left to right. Spans that only touch stay
//! separate, so back-to-back matches remain distinguishable.
//!
//! # Examples
//!
//! ```
//! use textspan::{Segment, segments};
//!
//! let parts = segments("abcabc", [3..6, 0..3]);
//! assert_eq!(parts, vec![Segment::Highlighted("abc"), Segment::Highlighted("abc")]);
//!
//! let parts = segments("xabcx", [1..4]);
//! assert_eq!(
//!     parts,
//!     vec![Segment::Plain("x"), Segment::Highlighted("abc"), Segment::Plain("x")]
//! );
//! ```

// std imports
use std::ops::Range;

/// A contiguous slice of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlighted(&'a str),
}

impl<'a> Segment<'a> {
    #[inline]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Highlighted(text) => text,
        }
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Highlighted(_))
    }
}

/// Splits `text` into ordered segments, highlighting every `char` covered by any of `spans`.
///
/// Spans reaching past the end of the text are clipped, empty spans are ignored.
/// Concatenating the returned segments always yields `text` again.
pub fn segments<'a, I>(text: &'a str, spans: I) -> Vec<Segment<'a>>
where
    I: IntoIterator<Item = Range<usize>>,
{
    let offsets = ByteOffsets::new(text);
    let regions = merge(spans, offsets.chars());

    let mut result = Vec::with_capacity(regions.len() * 2 + 1);
    let mut pos = 0;
    for region in regions {
        let start = offsets.get(region.start);
        let end = offsets.get(region.end);
        if start > pos {
            result.push(Segment::Plain(&text[pos..start]));
        }
        result.push(Segment::Highlighted(&text[start..end]));
        pos = end;
    }

    if pos < text.len() {
        result.push(Segment::Plain(&text[pos..]));
    }

    result
}

/// Normalizes spans: clips them to `limit`, drops empty ones, sorts by start
/// and merges overlapping ones. Adjacent spans are kept apart.
pub fn merge<I>(spans: I, limit: usize) -> Vec<Range<usize>>
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut spans: Vec<_> = spans
        .into_iter()
        .map(|span| span.start.min(limit)..span.end.min(limit))
        .filter(|span| span.start < span.end)
        .collect();
    spans.sort_by_key(|span| span.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }

    merged
}

// ---

/// Byte offset of every `char` boundary, including the end of the text.
struct ByteOffsets(Vec<usize>);

impl ByteOffsets {
    fn new(text: &str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self(offsets)
    }

    #[inline]
    fn chars(&self) -> usize {
        self.0.len() - 1
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        self.0[index]
    }
}
