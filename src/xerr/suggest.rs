// std imports
use std::{cmp::Ordering, collections::HashSet, fmt, sync::Arc};

// local imports
use super::HighlightQuoted;

const MIN_RELEVANCE: f64 = 0.75;

/// Known values similar to a mistyped one, most relevant first.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    candidates: Vec<(f64, Arc<str>)>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let mut candidates = Vec::<(f64, Arc<str>)>::new();
        let mut reg = HashSet::new();

        for variant in variants {
            let variant = variant.into();
            if reg.contains(&variant) {
                continue;
            }

            let relevance = strsim::jaro(wanted, &variant);
            if relevance > MIN_RELEVANCE {
                let pos = candidates
                    .binary_search_by(|candidate| {
                        if candidate.0 < relevance {
                            Ordering::Greater
                        } else {
                            Ordering::Less
                        }
                    })
                    .unwrap_or_else(|e| e);
                candidates.insert(pos, (relevance, variant.clone()));
                reg.insert(variant);
            }
        }

        Self { candidates }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|(_, candidate)| candidate.as_ref())
    }
}

/// Formats as `did you mean "a", "b" or "c"?`.
impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.candidates.len();
        write!(f, "did you mean ")?;
        for (i, candidate) in self.iter().enumerate() {
            match i {
                0 => {}
                i if i == n - 1 => write!(f, " or ")?,
                _ => write!(f, ", ")?,
            }
            write!(f, "{}", candidate.hlq())?;
        }
        write!(f, "?")
    }
}
