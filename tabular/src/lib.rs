//! # Tabular - small in-memory tables from delimited text
//!
//! Tabular reads CSV-like text into a [`Table`] of string cells with named
//! columns, lets you select columns by name and rows by (possibly negative)
//! index, and converts cells to numbers or text on demand.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Text/File  │────▶│   Parser    │────▶│    Table    │────▶│ i32/f64/... │
//! │ (auto-enc)  │     │ (split/trim)│     │ (select/cut)│     │ vec/matrix  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tabular::{parse_str, ReadSettings};
//!
//! let csv = "month,tempature,precipitation\n1,10.5,7.5\n2,6.4,0.0\n3,8.1,5.5\n4,10.2,10.2\n";
//! let settings = ReadSettings { new_line: "\n".into(), ..Default::default() };
//! let table = parse_str(csv, &settings).unwrap();
//!
//! let last = table.column("tempature").unwrap().row(-1).unwrap();
//! assert_eq!(last.as_scalar::<i32>().unwrap(), 10);
//! assert_eq!(last.as_scalar::<f64>().unwrap(), 10.2);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`options`] - Read/write options and [`DynamicValue`]
//! - [`text`] - Literal-substring split and join
//! - [`convert`] - Cell text to typed values
//! - [`frame`] - [`Table`], selection, slicing and shape conversion
//! - [`parser`] - Text and file parsing
//! - [`writer`] - Serialization

// Core modules
pub mod error;
pub mod options;

// Text handling
pub mod convert;
pub mod text;

// Table
pub mod frame;

// I/O
pub mod parser;
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, Error, Result, TableError, TableResult};

// =============================================================================
// Re-exports - Options
// =============================================================================

pub use options::{DynamicValue, ReadArgument, ReadOptions, ReadSettings, WriteOptions};

// =============================================================================
// Re-exports - Table
// =============================================================================

pub use convert::{convert, FromCell};
pub use frame::{Axis, Summary, Table};

// =============================================================================
// Re-exports - Parsing and writing
// =============================================================================

pub use parser::{parse_str, read_bytes, read_csv, read_csv_with};
pub use writer::write_csv;
