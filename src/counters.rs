//! Per-depth heading counters.

use crate::heading::MAX_DEPTH;

/// One counter per heading depth, all starting at zero.
///
/// Entering a heading resets every deeper counter and bumps its own. Shallower
/// counters are never touched, and depths skipped over by a jump keep whatever
/// value they last had.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters([usize; MAX_DEPTH]);

impl Counters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading at `depth` (1-based). Out-of-range depths are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdheadnum::Counters;
    ///
    /// let mut counters = Counters::new();
    /// counters.update(1);
    /// counters.update(2);
    /// counters.update(2);
    /// assert_eq!(counters.as_slice(), &[1, 2, 0, 0, 0, 0]);
    /// ```
    pub fn update(&mut self, depth: usize) {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return;
        }
        self.0[depth..].fill(0);
        self.0[depth - 1] += 1;
    }

    /// Counter value for `depth` (1-based), zero when out of range.
    #[must_use]
    pub fn get(&self, depth: usize) -> usize {
        depth
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}
