//! The in-memory table.
//!
//! A [`Table`] owns a header (column names) and a row-major grid of text
//! cells. Every row has exactly as many cells as the header.
//!
//! - [`select`] - selection and slicing by column name or row index
//! - [`shape`] - typed conversion to scalars, vectors and matrices
//!
//! Tables are created by the [`crate::parser`] entry points. Selection never
//! mutates; it returns a new table owning copies of the selected cells.
//! The only mutator is [`Table::rename`].
//!
//! Column names are not required to be unique. With duplicates, lookup by
//! name always resolves to the first match.

pub mod select;
pub mod shape;

pub use shape::Axis;

use serde::Serialize;
use std::fmt;

use crate::error::{TableError, TableResult};
use crate::text::join;

/// Header plus rows of text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from parts already known to be rectangular.
    pub(crate) fn from_parts(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == header.len()));
        Self { header, rows }
    }

    /// Column names, in order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the header wholesale.
    ///
    /// The new header must have as many names as the current one. Returns
    /// `self` so calls can be chained.
    ///
    /// # Example
    /// ```
    /// use tabular::parse_str;
    ///
    /// let mut table = parse_str("a,b\n1,2", &Default::default()).unwrap();
    /// table.rename(["x", "y"]).unwrap();
    /// assert_eq!(table.header(), ["x", "y"]);
    /// assert!(table.rename(["only"]).is_err());
    /// ```
    pub fn rename<I, S>(&mut self, header: I) -> TableResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        if header.len() != self.header.len() {
            return Err(TableError::SizeMismatch {
                expected: self.header.len(),
                actual: header.len(),
            });
        }
        self.header = header;
        Ok(self)
    }

    /// Column names with row and column counts.
    pub fn summary(&self) -> Summary {
        Summary {
            header: self.header.clone(),
            row_count: self.row_count(),
            column_count: self.column_count(),
        }
    }

    /// Print [`Table::summary`] to stdout.
    pub fn describe(&self) {
        println!("{}", self.summary());
    }
}

/// Diagnostic overview of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub header: Vec<String>,
    pub row_count: usize,
    pub column_count: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "header names: {{{}}}", join(&self.header, ","))?;
        writeln!(f, "    row size: {}", self.row_count)?;
        write!(f, " column size: {}", self.column_count)
    }
}
