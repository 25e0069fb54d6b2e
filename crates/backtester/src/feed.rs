// In crates/backtester/src/feed.rs

use core_types::Bar;
use tracing::debug;

use crate::error::{Error, Result};

/// A pull-based, forward-only replay of historical bars.
///
/// Bars are kept in the order they were loaded and handed out one at a time.
/// There is no random access and no stepping back; `reset` is the only way
/// to replay the same data.
#[derive(Debug, Clone, Default)]
pub struct SequentialFeed {
    bars: Vec<Bar>,
    position: usize,
}

impl SequentialFeed {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars, position: 0 }
    }

    /// Replaces the loaded bars and rewinds to the first one.
    pub fn load(&mut self, bars: Vec<Bar>) {
        debug!(count = bars.len(), "Loaded bars into feed.");
        self.bars = bars;
        self.position = 0;
    }

    pub fn has_next(&self) -> bool {
        self.position < self.bars.len()
    }

    /// Returns the bar under the cursor and advances past it.
    ///
    /// Fails with [`Error::Exhausted`] once every bar has been handed out.
    /// Check [`has_next`](Self::has_next) first.
    pub fn next_bar(&mut self) -> Result<Bar> {
        let bar = self.bars.get(self.position).cloned().ok_or(Error::Exhausted {
            position: self.position,
            len: self.bars.len(),
        })?;
        self.position += 1;
        Ok(bar)
    }

    pub fn reset(&mut self) {
        debug!(from = self.position, "Rewinding feed to the first bar.");
        self.position = 0;
    }

    /// Total number of loaded bars, regardless of the cursor.
    pub fn size(&self) -> usize {
        self.bars.len()
    }

    /// Index of the next bar to be returned.
    pub fn position(&self) -> usize {
        self.position
    }
}
