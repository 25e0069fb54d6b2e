// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SmaCrossoverSettings {
    /// Number of closes in the fast moving average.
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    /// Number of closes in the slow moving average. Also the warm-up length.
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

impl Default for SmaCrossoverSettings {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
        }
    }
}

fn default_short_window() -> usize { 10 }
fn default_long_window() -> usize { 50 }
