use thiserror::Error;

/// The two ways a measurement set can fail to produce a coefficient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Please enter a valid number for {field} (got '{value}')")]
    NonNumeric { field: String, value: String },

    #[error("Maxillary sum cannot be zero")]
    ZeroMaxillarySum,
}

#[derive(Error, Debug)]
pub enum NeffError {
    #[error("Invalid Input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command Error: {0}")]
    Command(String),
}

impl NeffError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type NeffResult<T> = Result<T, NeffError>;
