//! [`Table`] back to delimited text.
//!
//! Lines are joined with the configured terminator; there is none after the
//! last line. Cells are written verbatim, without quoting.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::frame::Table;
use crate::options::WriteOptions;
use crate::text::join;

impl Table {
    /// Serialize to a string.
    ///
    /// # Example
    /// ```
    /// use tabular::{parse_str, WriteOptions};
    ///
    /// let table = parse_str("a,b\n1,2\n", &Default::default()).unwrap();
    /// assert_eq!(table.to_csv_string(&WriteOptions::default()), "a,b\n1,2");
    ///
    /// let tsv = WriteOptions { header: false, separator: "\t".into(), ..Default::default() };
    /// assert_eq!(table.to_csv_string(&tsv), "1\t2");
    /// ```
    pub fn to_csv_string(&self, options: &WriteOptions) -> String {
        let header = options.header.then(|| join(self.header(), &options.separator));
        let lines: Vec<String> = header
            .into_iter()
            .chain(self.rows().iter().map(|row| join(row, &options.separator)))
            .collect();
        join(&lines, &options.new_line)
    }

    /// Write to `path`, overwriting or appending per `options.append`.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P, options: &WriteOptions) -> CsvResult<()> {
        write_csv(self, path, options)
    }
}

/// Write `table` to `path`.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P, options: &WriteOptions) -> CsvResult<()> {
    let path = path.as_ref();
    let write_error = |source| CsvError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(options.append)
        .truncate(!options.append)
        .open(path)
        .map_err(write_error)?;

    let content = table.to_csv_string(options);
    file.write_all(content.as_bytes()).map_err(write_error)?;

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        append = options.append,
        "wrote delimited text"
    );
    Ok(())
}
