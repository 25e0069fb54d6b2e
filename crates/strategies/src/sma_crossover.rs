// In crates/strategies/src/sma_crossover.rs

use std::collections::VecDeque;

use crate::types::SmaCrossoverSettings;
use crate::Strategy;
use core_types::{Bar, Signal, SignalType};

/// Strength reported while the long window is still filling.
const WARMUP_STRENGTH: f64 = 0.0;
/// Strength reported when the two averages are exactly equal.
const NEUTRAL_STRENGTH: f64 = 0.5;
/// Strength reported on a clear crossover.
const CROSSOVER_STRENGTH: f64 = 1.0;

// A bounded FIFO of closing prices.
#[derive(Debug, Clone)]
struct PriceWindow {
    cap: usize,
    prices: VecDeque<f64>,
}

impl PriceWindow {
    fn new(cap: usize) -> Self {
        Self {
            cap,
            prices: VecDeque::with_capacity(cap + 1),
        }
    }

    /// Appends a price, then drops the oldest one if the window overflowed.
    fn push(&mut self, price: f64) {
        self.prices.push_back(price);
        if self.prices.len() > self.cap {
            self.prices.pop_front();
        }
    }

    fn is_full(&self) -> bool {
        self.prices.len() >= self.cap
    }

    /// Arithmetic mean of the window, `0.0` when empty.
    fn mean(&self) -> f64 {
        if self.prices.is_empty() {
            return 0.0;
        }
        self.prices.iter().sum::<f64>() / self.prices.len() as f64
    }

    fn clear(&mut self) {
        self.prices.clear();
    }
}

/// Dual-window Simple Moving Average crossover.
///
/// Emits `Buy` while the short SMA sits above the long SMA, `Sell` while it
/// sits below and `Hold` when they are exactly equal or while the long window
/// is still warming up. The window sizes are not checked against each other:
/// warm-up always keys off the long window.
#[derive(Debug, Clone)]
pub struct SmaCrossover {
    name: String,
    short_window: PriceWindow,
    long_window: PriceWindow,
    current_signal: Signal,
}

impl SmaCrossover {
    /// Creates a new `SmaCrossover` strategy with the given window sizes.
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            name: format!("SMA_{}_{}", short_window, long_window),
            short_window: PriceWindow::new(short_window),
            long_window: PriceWindow::new(long_window),
            current_signal: initial_signal(),
        }
    }

    /// Creates a new `SmaCrossover` strategy instance from its settings.
    pub fn from_settings(settings: &SmaCrossoverSettings) -> Self {
        Self::new(settings.short_window, settings.long_window)
    }

    /// The current short and long SMAs, or `None` during warm-up.
    pub fn averages(&self) -> Option<(f64, f64)> {
        self.long_window
            .is_full()
            .then(|| (self.short_window.mean(), self.long_window.mean()))
    }
}

fn initial_signal() -> Signal {
    Signal::new(SignalType::Hold, "", CROSSOVER_STRENGTH)
}

impl Default for SmaCrossover {
    fn default() -> Self {
        Self::from_settings(&SmaCrossoverSettings::default())
    }
}

impl Strategy for SmaCrossover {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_new_bar(&mut self, bar: &Bar) {
        // 1. Slide both windows forward.
        self.short_window.push(bar.close);
        self.long_window.push(bar.close);

        // 2. Wait until the long window is full.
        let Some((short_sma, long_sma)) = self.averages() else {
            self.current_signal = Signal::new(SignalType::Hold, bar.timestamp.clone(), WARMUP_STRENGTH);
            return;
        };

        // 3. Classify the relationship between the two averages.
        let (signal_type, strength) = if short_sma > long_sma {
            // Golden cross: fast average above the slow one.
            (SignalType::Buy, CROSSOVER_STRENGTH)
        } else if short_sma < long_sma {
            // Death cross: fast average below the slow one.
            (SignalType::Sell, CROSSOVER_STRENGTH)
        } else {
            (SignalType::Hold, NEUTRAL_STRENGTH)
        };

        self.current_signal = Signal::new(signal_type, bar.timestamp.clone(), strength);
    }

    fn generate_signal(&self) -> Signal {
        self.current_signal.clone()
    }

    fn reset(&mut self) {
        self.short_window.clear();
        self.long_window.clear();
        self.current_signal = initial_signal();
    }
}
