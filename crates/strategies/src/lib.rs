// In crates/strategies/src/lib.rs

use core_types::{Bar, Signal};
pub mod error;
pub mod factory;
pub mod sma_crossover;
pub mod types;

pub use error::{Error, Result};

/// The universal interface for a trading strategy.
///
/// A strategy is a stateful entity fed one bar at a time in chronological
/// order. After every bar it holds exactly one current `Signal`, which
/// replaces the previous one.
pub trait Strategy {
    /// The name of the strategy, fixed at construction.
    fn name(&self) -> &str;

    /// Incorporates the next bar and recomputes the current signal.
    ///
    /// Bars must arrive in chronological order; this is not checked.
    fn on_new_bar(&mut self, bar: &Bar);

    /// Returns the signal computed by the most recent `on_new_bar` call.
    fn generate_signal(&self) -> Signal;

    /// Clears accumulated state so the strategy can replay a feed from the start.
    fn reset(&mut self) {}
}
