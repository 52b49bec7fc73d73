//! Error types for loading the dataset and running the server.

use thiserror::Error;

/// Failure while building a `MovieTable` from a CSV source. Always fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid year '{value}' on row {row}")]
    InvalidYear { row: usize, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not load dataset: {0}")]
    Load(#[from] LoadError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
