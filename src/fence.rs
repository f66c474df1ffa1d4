//! Fenced code block tracking.

use std::sync::LazyLock;

use regex::Regex;

static FENCE_RE: LazyLock<Regex> =
    lazy_regex!(r"^\s*(`{3,}|~{3,})", "fence pattern should compile");

/// Tracks whether a line stream is inside a fenced code block.
///
/// A block opened by a run of backticks or tildes closes on a run of the same
/// character that is at least as long.
#[derive(Debug, Default)]
pub struct FenceTracker {
    state: Option<(char, usize)>,
}

impl FenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tracker with a line.
    ///
    /// Returns `true` when the line is a fence marker.
    pub fn observe(&mut self, line: &str) -> bool {
        let Some(fence) = FENCE_RE.captures(line).and_then(|cap| cap.get(1)) else {
            return false;
        };
        let fence = fence.as_str();
        let marker_ch = fence.chars().next().unwrap_or('`');
        let marker_len = fence.len();

        match self.state {
            Some((open_ch, open_len)) if marker_ch == open_ch && marker_len >= open_len => {
                self.state = None;
            }
            Some(_) => {}
            None => self.state = Some((marker_ch, marker_len)),
        }
        true
    }

    #[must_use]
    pub fn in_fence(&self) -> bool {
        self.state.is_some()
    }
}
