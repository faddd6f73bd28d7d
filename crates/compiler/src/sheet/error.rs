//! Error types raised by sheet sources.

use thiserror::Error;

/// Errors surfaced by sheet sources.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet '{title}' not found in workbook")]
    UnknownSheet { title: String },

    #[error("invalid cell range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },

    #[error("cell ({row}, {column}) is outside the loaded range {range}")]
    CellOutOfRange {
        row: u32,
        column: u32,
        range: String,
    },

    #[error("cell ({row}, {column}) holds {value}, expected a whole non-negative number")]
    NotALevel { row: u32, column: u32, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
