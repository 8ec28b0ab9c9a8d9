//! Selection and slicing.
//!
//! Row indices follow Python rules: a negative index counts from the end,
//! so `-1` is the last row. Normalization (`len + index` for negative
//! values) happens before any bounds check, and errors report the index as
//! the caller wrote it.

use super::Table;
use crate::error::{TableError, TableResult};

/// Map a possibly negative index onto `0..`, or `None` if it falls before 0.
fn normalize(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        Some(index as usize)
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

impl Table {
    /// Position of the first header entry equal to `name`.
    pub fn column_index(&self, name: &str) -> TableResult<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Single column by name.
    ///
    /// # Example
    /// ```
    /// use tabular::parse_str;
    ///
    /// let table = parse_str("a,b\n1,2\n3,4", &Default::default()).unwrap();
    /// let b = table.column("b").unwrap();
    /// assert_eq!(b.header(), ["b"]);
    /// assert_eq!(b.rows(), [vec!["2"], vec!["4"]]);
    /// ```
    pub fn column(&self, name: &str) -> TableResult<Table> {
        let index = self.column_index(name)?;
        let rows = self
            .rows
            .iter()
            .map(|row| vec![row[index].clone()])
            .collect();
        Ok(Table::from_parts(vec![self.header[index].clone()], rows))
    }

    /// Several columns by name, in the order given.
    ///
    /// Names may repeat or be reordered. Fails on the first name that has
    /// no match.
    pub fn columns<S: AsRef<str>>(&self, names: &[S]) -> TableResult<Table> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name.as_ref()))
            .collect::<TableResult<Vec<_>>>()?;

        let header = indices.iter().map(|&i| self.header[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table::from_parts(header, rows))
    }

    /// Single row by index; negative indices count from the end.
    pub fn row(&self, index: isize) -> TableResult<Table> {
        let len = self.row_count();
        let at = normalize(index, len)
            .filter(|&i| i < len)
            .ok_or(TableError::IndexOutOfRange { index, len })?;
        Ok(Table::from_parts(self.header.clone(), vec![self.rows[at].clone()]))
    }

    /// Rows in `[start, end)`; negative bounds count from the end.
    ///
    /// Both bounds may range up to the row count, so `slice(0, n)` on an
    /// `n`-row table returns all of it.
    ///
    /// # Example
    /// ```
    /// use tabular::parse_str;
    ///
    /// let table = parse_str("n\n0\n1\n2\n3", &Default::default()).unwrap();
    /// assert_eq!(table.slice(1, -1).unwrap().rows(), [vec!["1"], vec!["2"]]);
    /// assert_eq!(table.slice(0, 4).unwrap(), table);
    /// assert!(table.slice(3, 1).is_err());
    /// ```
    pub fn slice(&self, start: isize, end: isize) -> TableResult<Table> {
        let len = self.row_count();
        let bound = |index: isize| {
            normalize(index, len)
                .filter(|&i| i <= len)
                .ok_or(TableError::IndexOutOfRange { index, len })
        };
        let from = bound(start)?;
        let to = bound(end)?;
        if from > to {
            return Err(TableError::InvertedSlice { start, end });
        }
        Ok(Table::from_parts(self.header.clone(), self.rows[from..to].to_vec()))
    }
}
