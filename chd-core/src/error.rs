/// Error types for the county health core library
use thiserror::Error;

/// Main error type for loading county data and geometry
#[derive(Error, Debug)]
pub enum ChdError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A required CSV column is absent from the header row
    #[error("Missing CSV column: {0}")]
    MissingColumn(String),

    /// The topology has no object with the requested name
    #[error("Topology object not found: {0}")]
    MissingObject(String),

    /// A geometry references an arc index outside the arcs table
    #[error("Invalid arc index {index} (topology has {available} arcs)")]
    InvalidArc { index: i64, available: usize },

    /// Unknown attribute column name
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Type alias for Results using ChdError
pub type Result<T> = std::result::Result<T, ChdError>;
