// In crates/strategies/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Attempted to create unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid strategy parameters: {0}")]
    InvalidParameters(String),

    #[error("Failed to parse strategy parameters: {0}")]
    Params(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
