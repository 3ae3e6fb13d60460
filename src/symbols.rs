// third-party imports
use derive_more::Deref;

// ---

/// Text prepared for matching, one element per `char` of the source.
///
/// Case folding never changes the length, so an index into `Symbols` is always
/// a valid `char` index into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Symbols(Vec<char>);

impl Symbols {
    pub fn new(text: &str, case_insensitive: bool) -> Self {
        if case_insensitive {
            Self(text.chars().map(fold).collect())
        } else {
            Self(text.chars().collect())
        }
    }
}

/// Lower-cases a single `char`.
///
/// Characters whose lowercase form is longer than one `char` (e.g. `İ`) are left as is.
#[inline]
pub fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(lc), None) => lc,
        _ => ch,
    }
}

#[cfg(test)]
mod tests;
