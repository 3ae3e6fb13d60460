// std imports
use std::fmt;

// third-party imports
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

// ---

/// A single observable event in a matcher run.
///
/// Positions are text indices for KMP and Rabin-Karp. For the Z-algorithm they
/// are indices into the combined `pattern + separator + text` buffer, except for
/// [`Step::Found`] which always carries the match position in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    /// Successful character comparison during hash verification.
    Compare { position: usize, pattern_index: usize },
    /// Text character equals the pattern character.
    Match { position: usize, pattern_index: usize },
    /// Text character differs from the pattern character.
    /// `shift` is set when the mismatch caused a failure-function fallback.
    Mismatch {
        position: usize,
        pattern_index: usize,
        shift: Option<usize>,
    },
    /// The pattern occurs at `position`.
    Found { position: usize },
    HashCompare {
        position: usize,
        window_hash: u32,
        pattern_hash: u32,
    },
    /// Hashes were equal but the window differs from the pattern at `pattern_index`.
    Spurious { position: usize, pattern_index: usize },
    /// `z` was seeded from the mirrored position inside the current box.
    ZBox { position: usize, mirror: usize, z: usize },
    Extend { position: usize, z: usize },
    /// The box became `[left, right)`.
    UpdateBox { position: usize, left: usize, right: usize },
}

impl Step {
    pub fn position(&self) -> usize {
        match *self {
            Self::Compare { position, .. }
            | Self::Match { position, .. }
            | Self::Mismatch { position, .. }
            | Self::Found { position }
            | Self::HashCompare { position, .. }
            | Self::Spurious { position, .. }
            | Self::ZBox { position, .. }
            | Self::Extend { position, .. }
            | Self::UpdateBox { position, .. } => position,
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Self::Compare { .. } => StepKind::Compare,
            Self::Match { .. } => StepKind::Match,
            Self::Mismatch { .. } => StepKind::Mismatch,
            Self::Found { .. } => StepKind::Found,
            Self::HashCompare { .. } => StepKind::HashCompare,
            Self::Spurious { .. } => StepKind::Spurious,
            Self::ZBox { .. } => StepKind::ZBox,
            Self::Extend { .. } => StepKind::Extend,
            Self::UpdateBox { .. } => StepKind::UpdateBox,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Compare {
                position,
                pattern_index,
            } => write!(f, "text[{position}] equals pattern[{pattern_index}]"),
            Self::Match {
                position,
                pattern_index,
            } => write!(f, "text[{position}] matches pattern[{pattern_index}]"),
            Self::Mismatch {
                position,
                pattern_index,
                shift: Some(shift),
            } => write!(
                f,
                "text[{position}] differs from pattern[{pattern_index}], shift pattern by {shift}"
            ),
            Self::Mismatch {
                position,
                pattern_index,
                shift: None,
            } => write!(f, "text[{position}] differs from pattern[{pattern_index}]"),
            Self::Found { position } => write!(f, "pattern found at {position}"),
            Self::HashCompare {
                position,
                window_hash,
                pattern_hash,
            } => {
                let relation = if window_hash == pattern_hash { "==" } else { "!=" };
                write!(
                    f,
                    "window at {position} has hash {window_hash} {relation} pattern hash {pattern_hash}"
                )
            }
            Self::Spurious {
                position,
                pattern_index,
            } => write!(
                f,
                "spurious hit at {position}, window differs at pattern[{pattern_index}]"
            ),
            Self::ZBox { position, mirror, z } => {
                write!(f, "z[{position}] starts at {z} from mirror z[{mirror}]")
            }
            Self::Extend { position, z } => write!(f, "z[{position}] extended to {z}"),
            Self::UpdateBox { position, left, right } => {
                write!(f, "box moved to [{left}, {right}) by z[{position}]")
            }
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum StepKind {
    Compare,
    Match,
    Mismatch,
    Found,
    HashCompare,
    Spurious,
    ZBox,
    Extend,
    UpdateBox,
}
