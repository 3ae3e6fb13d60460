// local imports
use crate::trace::Step;

// ---

/// Cursor over a step trace for step-by-step playback.
///
/// The cursor always points at an existing step unless the trace is empty.
/// Moving is idempotent at the boundaries and revisiting an index yields the same step.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    steps: &'a [Step],
    index: usize,
}

impl<'a> Playback<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps, index: 0 }
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Step> {
        self.steps.get(self.index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Moves one step forward, returns `None` when already at the last step.
    pub fn forward(&mut self) -> Option<&'a Step> {
        if self.index + 1 < self.steps.len() {
            self.index += 1;
            self.current()
        } else {
            None
        }
    }

    /// Moves one step back, returns `None` when already at the first step.
    pub fn backward(&mut self) -> Option<&'a Step> {
        if self.index > 0 {
            self.index -= 1;
            self.current()
        } else {
            None
        }
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&'a Step> {
        self.index = index.min(self.steps.len().saturating_sub(1));
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.steps.len()
    }

    /// Fraction of the trace played so far, `1.0` for an empty trace.
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            1.0
        } else {
            (self.index + 1) as f64 / self.steps.len() as f64
        }
    }
}

#[cfg(test)]
mod tests;
