// std imports
use std::fmt::{self, Write as _};

// third-party imports
use owo_colors::{OwoColorize, Style};

// local imports
pub mod suggest;

// re-exports
pub use suggest::Suggestions;

// ---

/// Highlighting of values embedded into error messages and tips.
pub trait Highlight {
    type Output: fmt::Display;

    fn hl(self) -> Self::Output;
}

impl<'a, S> Highlight for &'a S
where
    S: fmt::Display + ?Sized,
{
    type Output = Highlighted<&'a S>;

    fn hl(self) -> Self::Output {
        Highlighted(self)
    }
}

// ---

pub trait HighlightQuoted {
    type Output: fmt::Display;

    fn hlq(self) -> Self::Output;
}

impl<'a, S> HighlightQuoted for &'a S
where
    S: fmt::Display + ?Sized,
{
    type Output = Highlighted<Quoted<&'a S>>;

    fn hlq(self) -> Self::Output {
        Highlighted(Quoted(self))
    }
}

// ---

pub struct Highlighted<S>(S);

impl<S> fmt::Display for Highlighted<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.style(HIGHLIGHT))
    }
}

// ---

pub struct Quoted<S>(S);

impl<S> fmt::Display for Quoted<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        write!(&mut buf, "{}", self.0)?;
        write!(f, "{:?}", buf)
    }
}

// ---

/// Comma-separated list of highlighted and quoted items.
pub struct HighlightedList<I>(pub I);

impl<I> fmt::Display for HighlightedList<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, item) in self.0.clone().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item.hlq())?;
        }
        Ok(())
    }
}

// ---

const HIGHLIGHT: Style = Style::new().yellow();
