use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Parcel Validation Error: {0}")]
    Validation(String),
}

pub type LfResult<T> = Result<T, AnalysisError>;
