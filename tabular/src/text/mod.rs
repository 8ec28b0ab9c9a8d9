//! Literal-substring splitting and joining.
//!
//! Separators are plain substrings, never patterns. There is no quoting:
//! a separator inside a cell always splits it.

/// Characters stripped by [`trim`].
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Split `text` on every non-overlapping occurrence of `separator`.
///
/// - Empty `text` gives an empty vector.
/// - Empty `separator` gives `text` unchanged as the only element.
/// - With `auto_trim`, each piece is passed through [`trim`].
///
/// # Example
/// ```
/// use tabular::text::split;
///
/// assert_eq!(split("a, b,c", ",", true), vec!["a", "b", "c"]);
/// assert_eq!(split("a,", ",", false), vec!["a", ""]);
/// assert!(split("", ",", false).is_empty());
/// ```
pub fn split(text: &str, separator: &str, auto_trim: bool) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![text.to_string()];
    }

    text.split(separator)
        .map(|piece| {
            if auto_trim {
                trim(piece).to_string()
            } else {
                piece.to_string()
            }
        })
        .collect()
}

/// Concatenate `pieces` with `separator` between them, no trailing separator.
pub fn join<S: AsRef<str>>(pieces: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(piece.as_ref());
    }
    out
}

/// Strip leading and trailing ASCII whitespace (`space \t \n \r \f \v`).
///
/// Unlike [`str::trim`] this leaves Unicode spaces alone.
pub fn trim(text: &str) -> &str {
    text.trim_matches(WHITESPACE)
}
