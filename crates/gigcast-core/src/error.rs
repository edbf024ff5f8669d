//! Error types for Gigcast

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not enough data: need at least {required} months of income history, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
