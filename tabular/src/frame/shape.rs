//! Typed conversion of a table into native shapes.
//!
//! All conversions are explicit and go through [`FromCell`], so the
//! permissive numeric rules of [`crate::convert`] apply to every cell.

use serde::{Deserialize, Serialize};

use super::Table;
use crate::convert::FromCell;
use crate::error::{TableError, TableResult};

/// Iteration direction for [`Table::to_vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Walk down the single column.
    #[default]
    Column,
    /// Walk across the single row.
    Row,
}

impl Table {
    fn shape_error(&self, operation: &'static str, expected: &'static str) -> TableError {
        TableError::ShapeMismatch {
            operation,
            expected,
            rows: self.row_count(),
            columns: self.column_count(),
        }
    }

    /// The only cell of a 1x1 table, converted to `T`.
    ///
    /// # Example
    /// ```
    /// use tabular::parse_str;
    ///
    /// let table = parse_str("t\n10.2", &Default::default()).unwrap();
    /// assert_eq!(table.as_scalar::<i32>().unwrap(), 10);
    /// assert_eq!(table.as_scalar::<f64>().unwrap(), 10.2);
    /// ```
    pub fn as_scalar<T: FromCell>(&self) -> TableResult<T> {
        match self.rows.as_slice() {
            [row] if row.len() == 1 => Ok(T::from_cell(&row[0])),
            _ => Err(self.shape_error("as_scalar", "exactly 1 row and 1 column")),
        }
    }

    /// Cells along `axis`, converted to `T`.
    ///
    /// [`Axis::Column`] needs exactly one column and yields one value per
    /// row. [`Axis::Row`] needs exactly one row and yields one value per
    /// column.
    pub fn to_vector<T: FromCell>(&self, axis: Axis) -> TableResult<Vec<T>> {
        match axis {
            Axis::Column => {
                if self.column_count() != 1 {
                    return Err(self.shape_error("to_vector(Column)", "exactly 1 column"));
                }
                Ok(self.rows.iter().map(|row| T::from_cell(&row[0])).collect())
            }
            Axis::Row => match self.rows.as_slice() {
                [row] => Ok(row.iter().map(|cell| T::from_cell(cell)).collect()),
                _ => Err(self.shape_error("to_vector(Row)", "exactly 1 row")),
            },
        }
    }

    /// Flatten a one-row or one-column table.
    ///
    /// Picks [`Axis::Row`] when there is exactly one row, [`Axis::Column`]
    /// otherwise.
    pub fn to_flat_vector<T: FromCell>(&self) -> TableResult<Vec<T>> {
        let axis = if self.row_count() == 1 { Axis::Row } else { Axis::Column };
        self.to_vector(axis)
    }

    /// Every cell converted to `T`, row-major, same shape.
    pub fn to_matrix<T: FromCell>(&self) -> Vec<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| T::from_cell(cell)).collect())
            .collect()
    }
}
