pub mod data;
pub mod error;
pub mod feed;

pub use error::{Error, Result};
pub use feed::SequentialFeed;

use core_types::{Bar, Signal, SignalType};
use strategies::Strategy;
use tracing::{debug, info};

/// Tally of one replay through a strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub bars: usize,
    pub buys: usize,
    pub sells: usize,
    pub holds: usize,
    /// The strategy's signal after the final bar, `None` if no bar was replayed.
    pub last_signal: Option<Signal>,
}

impl RunSummary {
    fn record(&mut self, signal: &Signal) {
        self.bars += 1;
        match signal.signal_type {
            SignalType::Buy => self.buys += 1,
            SignalType::Sell => self.sells += 1,
            SignalType::Hold => self.holds += 1,
        }
        self.last_signal = Some(signal.clone());
    }
}

/// Drives bars from a feed through a single strategy.
pub struct Backtester {
    /// A single strategy instance to test.
    strategy: Box<dyn Strategy + Send>,
}

impl Backtester {
    pub fn new(strategy: Box<dyn Strategy + Send>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Replays every remaining bar of `feed`.
    ///
    /// Each bar goes into the strategy, then the resulting signal and the bar
    /// are handed to `on_signal`. The feed is consumed from its current
    /// position; nothing is rewound.
    pub fn run<F>(&mut self, feed: &mut SequentialFeed, mut on_signal: F) -> Result<RunSummary>
    where
        F: FnMut(&Bar, &Signal),
    {
        let mut summary = RunSummary::default();

        while feed.has_next() {
            let bar = feed.next_bar()?;
            self.strategy.on_new_bar(&bar);
            let signal = self.strategy.generate_signal();
            debug!(
                timestamp = %bar.timestamp,
                close = bar.close,
                signal = %signal.signal_type,
                strength = signal.strength,
                "Processed bar."
            );
            summary.record(&signal);
            on_signal(&bar, &signal);
        }

        info!(
            strategy = self.strategy.name(),
            bars = summary.bars,
            buys = summary.buys,
            sells = summary.sells,
            holds = summary.holds,
            "Backtest finished."
        );
        Ok(summary)
    }

    /// Rewinds the feed and the strategy, then replays the whole feed.
    pub fn replay<F>(&mut self, feed: &mut SequentialFeed, on_signal: F) -> Result<RunSummary>
    where
        F: FnMut(&Bar, &Signal),
    {
        feed.reset();
        self.strategy.reset();
        self.run(feed, on_signal)
    }
}
