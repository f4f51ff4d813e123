//! Run constants and the options struct built from them.

use std::time::Duration;

/// Delay between rounds of bubble sort, in milliseconds.
pub const INTERVAL_MS: u64 = 1;

/// Whether whitespace is left in place instead of being sorted.
pub const SKIP_WHITESPACE: bool = true;

/// Delay between rounds of bubble sort.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(INTERVAL_MS);

/// Options for one sorting run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOptions {
    /// Pause between consecutive passes.
    pub interval: Duration,
    /// Leave whitespace where it is and sort only the other characters.
    pub skip_whitespace: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            skip_whitespace: SKIP_WHITESPACE,
        }
    }
}

impl SortOptions {
    /// Set the inter-pass delay.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Choose whether whitespace takes part in the sort.
    #[must_use]
    pub fn with_skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }

    /// Whether `ch` is left in place by the renderer.
    #[must_use]
    pub fn is_fixed(&self, ch: char) -> bool {
        is_fixed(ch, self.skip_whitespace)
    }
}

/// Whether `ch` stays put instead of taking part in the sort.
#[must_use]
pub fn is_fixed(ch: char, skip_whitespace: bool) -> bool {
    skip_whitespace && ch.is_whitespace()
}
