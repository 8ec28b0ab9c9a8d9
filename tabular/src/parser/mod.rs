//! Delimited text to [`Table`].
//!
//! Lines and cells are split on literal substrings (see [`crate::text`]);
//! there is no quoting. Files are read whole, decoded (UTF-8 first, then
//! charset detection), and parsed in memory.

use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CsvError, CsvResult};
use crate::frame::Table;
use crate::options::{ReadOptions, ReadSettings};
use crate::text::split;

const UTF8_BOM: &str = "\u{feff}";

/// Parse `text` into a table.
///
/// 1. Split into lines on `settings.new_line`, dropping trailing empty lines.
/// 2. Take the header from the first line, or number the columns
///    `"0".."N-1"` after the first line's cell count.
/// 3. Split every remaining line into cells; each must match the header
///    length.
///
/// Empty input gives an empty table (no columns, no rows).
///
/// # Example
/// ```
/// use tabular::{parse_str, ReadSettings};
///
/// let table = parse_str("a;b\n1;2\n", &ReadSettings {
///     separator: ";".into(),
///     new_line: "\n".into(),
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(table.header(), ["a", "b"]);
/// assert_eq!(table.row_count(), 1);
/// ```
pub fn parse_str(text: &str, settings: &ReadSettings) -> CsvResult<Table> {
    let mut lines = split(text, &settings.new_line, false);
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut lines = lines.into_iter();
    let header: Vec<String> = if settings.header_present {
        lines
            .next()
            .map(|first| split(&first, &settings.separator, settings.auto_trim))
            .unwrap_or_default()
    } else {
        let width = lines
            .as_slice()
            .first()
            .map_or(0, |first| split(first, &settings.separator, settings.auto_trim).len());
        (0..width).map(|i| i.to_string()).collect()
    };

    let first_data_line = if settings.header_present { 2 } else { 1 };
    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.enumerate() {
        let row = split(&line, &settings.separator, settings.auto_trim);
        if row.len() != header.len() {
            return Err(CsvError::Structure {
                line: row_idx + first_data_line,
                expected: header.len(),
                actual: row.len(),
            });
        }
        rows.push(row);
    }

    debug!(
        columns = header.len(),
        rows = rows.len(),
        header_present = settings.header_present,
        "parsed delimited text"
    );
    Ok(Table::from_parts(header, rows))
}

/// Read a file with sparse [`ReadOptions`].
///
/// # Example
/// ```no_run
/// use tabular::{read_csv, ReadArgument, ReadOptions};
///
/// let options = ReadOptions::new().with(ReadArgument::Separator, ";");
/// let table = read_csv("weather.csv", &options)?;
/// table.describe();
/// # Ok::<(), tabular::CsvError>(())
/// ```
pub fn read_csv<P: AsRef<Path>>(path: P, options: &ReadOptions) -> CsvResult<Table> {
    read_csv_with(path, &options.resolve())
}

/// Read a file with fully resolved [`ReadSettings`].
pub fn read_csv_with<P: AsRef<Path>>(path: P, settings: &ReadSettings) -> CsvResult<Table> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    read_bytes(&bytes, settings)
}

/// Decode raw bytes and parse them.
pub fn read_bytes(bytes: &[u8], settings: &ReadSettings) -> CsvResult<Table> {
    let content = match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string(),
        Err(_) => {
            let encoding = detect_encoding(bytes);
            debug!(%encoding, "input is not UTF-8, decoding");
            decode_content(bytes, &encoding)
        }
    };
    parse_str(&content, settings)
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using `encoding`.
///
/// Labels `encoding_rs` knows are decoded with it (`iso-8859-1` maps to
/// windows-1252, its superset). Anything else, including an empty label
/// when detection found nothing, falls back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let label = encoding.trim().to_lowercase();
    if matches!(label.as_str(), "utf-8" | "utf8" | "ascii") {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    match encoding_rs::Encoding::for_label(label.as_bytes()) {
        Some(codec) => {
            let (decoded, _, had_errors) = codec.decode(bytes);
            if had_errors {
                warn!(encoding = codec.name(), "replaced malformed sequences while decoding");
            }
            decoded.into_owned()
        }
        None => {
            warn!(%encoding, "unknown encoding, decoding as lossy UTF-8");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReadArgument;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WEATHER: &str =
        "month,tempature,precipitation\n1,10.5,7.5\n2,6.4,0.0\n3,8.1,5.5\n4,10.2,10.2\n";

    fn lf() -> ReadSettings {
        ReadSettings {
            new_line: "\n".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_weather() {
        let table = parse_str(WEATHER, &lf()).unwrap();
        assert_eq!(table.header(), ["month", "tempature", "precipitation"]);
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.rows()[3], vec!["4", "10.2", "10.2"]);
    }

    #[test]
    fn test_trailing_empty_lines_dropped() {
        let table = parse_str("a,b\n1,2\n\n\n", &lf()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_inner_empty_line_is_structural_error() {
        let err = parse_str("a,b\n\n1,2\n", &lf()).unwrap_err();
        assert!(matches!(err, CsvError::Structure { line: 2, expected: 2, actual: 0 }));
    }

    #[test]
    fn test_synthesized_header() {
        let settings = ReadSettings { header_present: false, ..lf() };
        let table = parse_str("x,y,z\n1,2,3", &settings).unwrap();
        assert_eq!(table.header(), ["0", "1", "2"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec!["x", "y", "z"]);
    }

    #[test]
    fn test_structure_error_with_header() {
        let err = parse_str("a,b,c\n1,2,3\n4,5\n", &lf()).unwrap_err();
        match err {
            CsvError::Structure { line, expected, actual } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_structure_error_without_header() {
        let settings = ReadSettings { header_present: false, ..lf() };
        let err = parse_str("1,2,3\n4,5\n", &settings).unwrap_err();
        assert!(matches!(err, CsvError::Structure { line: 2, expected: 3, actual: 2 }));
    }

    #[test]
    fn test_auto_trim() {
        let table = parse_str(" a , b \n 1 ,\t2\r\n", &lf()).unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        assert_eq!(table.rows()[0], vec!["1", "2"]);

        let raw = ReadSettings { auto_trim: false, ..lf() };
        let table = parse_str(" a , b \n 1 ,\t2\n", &raw).unwrap();
        assert_eq!(table.header(), [" a ", " b "]);
        assert_eq!(table.rows()[0], vec![" 1 ", "\t2"]);
    }

    #[test]
    fn test_crlf_terminator() {
        let settings = ReadSettings { new_line: "\r\n".into(), ..Default::default() };
        let table = parse_str("a,b\r\n1,2\r\n3,4\r\n", &settings).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["3", "4"]);
    }

    #[test]
    fn test_multichar_separator() {
        let settings = ReadSettings { separator: "::".into(), ..lf() };
        let table = parse_str("a::b\n1::2", &settings).unwrap();
        assert_eq!(table.rows()[0], vec!["1", "2"]);
    }

    #[test]
    fn test_empty_input() {
        let table = parse_str("", &lf()).unwrap();
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());

        let table = parse_str("\n\n", &lf()).unwrap();
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_header_only() {
        let table = parse_str("a,b\n", &lf()).unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(WEATHER.as_bytes()).unwrap();

        let options = ReadOptions::new().with(ReadArgument::NewLine, "\n");
        let table = read_csv(file.path(), &options).unwrap();
        assert_eq!(table.row_count(), 4);
        assert_eq!(
            table.column("tempature").unwrap().row(-1).unwrap().as_scalar::<f64>().unwrap(),
            10.2
        );
    }

    #[test]
    fn test_read_csv_missing_file() {
        let err = read_csv("/definitely/not/here.csv", &ReadOptions::new()).unwrap_err();
        assert!(matches!(err, CsvError::Read { .. }));
        assert!(err.to_string().contains("here.csv"));
    }

    #[test]
    fn test_read_csv_structure_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b,c\n1,2,3\n4,5\n").unwrap();

        let err = read_csv_with(file.path(), &lf()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Line 3"));
        assert!(msg.contains("3 cells"));
        assert!(msg.contains("has 2"));
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let table = read_bytes("\u{feff}a,b\n1,2".as_bytes(), &lf()).unwrap();
        assert_eq!(table.header(), ["a", "b"]);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société,Ville\nÉcole,Lyon" in ISO-8859-1
        let mut bytes = vec![0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        bytes.extend_from_slice(b",Ville\n");
        bytes.extend_from_slice(&[0xC9, 0x63, 0x6F, 0x6C, 0x65]);
        bytes.extend_from_slice(b",Lyon");
        let decoded = decode_content(&bytes, "iso-8859-1");
        assert!(decoded.starts_with("Soci\u{e9}t\u{e9}"));

        let table = parse_str(&decoded, &lf()).unwrap();
        assert_eq!(table.rows()[0][1], "Lyon");
    }

    #[test]
    fn test_decode_unknown_label_is_lossy() {
        let decoded = decode_content(b"plain", "x-made-up");
        assert_eq!(decoded, "plain");
    }

    #[test]
    fn test_decode_empty_label_is_lossy() {
        assert_eq!(decode_content(b"a\x80b", ""), "a\u{fffd}b");
    }

    #[test]
    fn test_latin1_keeps_currency_sign() {
        // 0xA4 is the currency sign in ISO-8859-1 and the euro sign in ISO-8859-15
        let decoded = decode_content(&[0xA4, b'1', b'0'], "iso-8859-1");
        assert_eq!(decoded, "\u{a4}10");
        assert_eq!(decode_content(&[0xA4], "latin1"), "\u{a4}");
        assert_eq!(decode_content(&[0xA4], "ISO-8859-15"), "\u{20ac}");
    }

    #[test]
    fn test_read_bytes_latin1() {
        // "ville,nom\nLyon,Société Générale\n..." in ISO-8859-1
        let mut bytes = b"ville,nom\n".to_vec();
        for _ in 0..8 {
            bytes.extend_from_slice(b"Lyon,Soci\xE9t\xE9 G\xE9n\xE9rale d'\xC9lectricit\xE9\n");
        }

        let table = read_bytes(&bytes, &lf()).unwrap();
        assert_eq!(table.header(), ["ville", "nom"]);
        assert_eq!(table.row_count(), 8);
        assert_eq!(table.rows()[0][0], "Lyon");

        // detection picks the charset; decoding follows it
        let encoding = detect_encoding(&bytes);
        let expected = parse_str(&decode_content(&bytes, &encoding), &lf()).unwrap();
        assert_eq!(table, expected);
        if matches!(encoding.as_str(), "iso-8859-1" | "windows-1252") {
            assert_eq!(
                table.rows()[0][1],
                "Soci\u{e9}t\u{e9} G\u{e9}n\u{e9}rale d'\u{c9}lectricit\u{e9}"
            );
        }
    }

    #[test]
    fn test_read_bytes_undetectable_falls_back_to_lossy() {
        let table = read_bytes(b"a,b\n\x80,\x81", &lf()).unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        assert_eq!(table.row_count(), 1);
        assert!(table.rows()[0].iter().all(|cell| !cell.is_empty()));
    }

    #[test]
    fn test_read_csv_with_non_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n\x80,\x81\n").unwrap();

        let table = read_csv_with(file.path(), &lf()).unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        assert_eq!(table.row_count(), 1);
    }
}
