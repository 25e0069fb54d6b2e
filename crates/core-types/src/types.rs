// In crates/core-types/src/types.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single OHLCV observation.
///
/// The timestamp is an opaque ordering key (usually ISO-8601). No relation
/// between open/high/low/close is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        timestamp: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// The direction a strategy is pointing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so callers can align the column with `{:<4}`.
        f.pad(match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
            SignalType::Hold => "HOLD",
        })
    }
}

/// A strategy's current trading decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_type: SignalType,
    /// Copied from the bar that produced this signal, empty before the first bar.
    pub timestamp: String,
    /// Confidence, conventionally in `[0, 1]`. Never clamped.
    pub strength: f64,
}

impl Signal {
    pub fn new(signal_type: SignalType, timestamp: impl Into<String>, strength: f64) -> Self {
        Self {
            signal_type,
            timestamp: timestamp.into(),
            strength,
        }
    }
}
