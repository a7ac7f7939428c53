//! Error types for famscore

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The payload could not be read as a numeric metrics record
    /// (e.g., a text value where a number is expected).
    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),
}

pub type Result<T> = std::result::Result<T, Error>;
