//! Error types for parsing, selecting and converting tables.
//!
//! Errors are split by concern:
//!
//! - [`CsvError`] - reading and writing delimited text
//! - [`TableError`] - selection, slicing, renaming and shape conversion
//! - [`Error`] - top-level union used by the CLI
//!
//! Conversion between them is automatic via `From` implementations,
//! so `?` works across the boundary.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while turning delimited text into a [`crate::Table`] or back.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source file missing or unreadable.
    #[error("Cannot read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination cannot be opened or written.
    #[error("Cannot write file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row does not have as many cells as the header.
    ///
    /// `line` is the 1-based line number in the input, header included.
    #[error("Line {line}: header has {expected} cells but row has {actual}")]
    Structure {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors raised by operations on an already parsed [`crate::Table`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// No header entry matches the requested column name.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Row index outside `[0, len)` after negative-index normalization.
    ///
    /// `index` is the value the caller passed, not the normalized one.
    #[error("Row index {index} out of range for {len} rows")]
    IndexOutOfRange { index: isize, len: usize },

    /// Slice start lies after slice end.
    #[error("Slice start {start} is after end {end}")]
    InvertedSlice { start: isize, end: isize },

    /// The table does not have the row/column count an operation needs.
    #[error("{operation} requires {expected}, table is {rows}x{columns}")]
    ShapeMismatch {
        operation: &'static str,
        expected: &'static str,
        rows: usize,
        columns: usize,
    },

    /// `rename` got a header of the wrong length.
    #[error("Header has {expected} columns, got {actual} names")]
    SizeMismatch { expected: usize, actual: usize },
}

// =============================================================================
// Top-level Error
// =============================================================================

/// Any error this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// CSV error.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Table error.
    #[error(transparent)]
    Table(#[from] TableError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Result type for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Result type for mixed operations.
pub type Result<T> = std::result::Result<T, Error>;
