// In crates/backtester/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// `next_bar` was called on a feed with no bars left.
    #[error("No more bars available (position {position} of {len})")]
    Exhausted { position: usize, len: usize },

    #[error("Failed to read bar data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse bar data at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
