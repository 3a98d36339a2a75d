use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    #[error("Unsupported magnitude: digit group {place_index} is beyond quintillion")]
    UnsupportedMagnitude { place_index: usize },
    #[error("Invalid digit group: {0} is not in 0..=999")]
    InvalidDigitGroup(u16),
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;
