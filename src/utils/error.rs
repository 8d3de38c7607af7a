use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid record at line {line}: want 3 fields but got {found}")]
    MalformedRecord { line: u64, found: usize },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Too many candidate rides for exhaustive search: {count} (must be fewer than 64)")]
    TooManyCandidates { count: usize },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
