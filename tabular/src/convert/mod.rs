//! Cell text to typed value conversion.
//!
//! Every cell is stored as text; accessors convert on demand through
//! [`FromCell`]. Numeric reads are stream-style and permissive:
//!
//! - leading ASCII whitespace is skipped
//! - the longest valid numeric prefix is read (`"10.5"` as an integer is `10`)
//! - text with no numeric prefix yields zero instead of an error
//! - integers outside the target range saturate at its bounds
//!
//! Conversion therefore cannot be used to detect malformed numbers.
//! Validate the text yourself if that matters.

/// Types a cell can be converted into.
pub trait FromCell: Sized {
    /// Convert one cell. Never fails; see the module docs for the rules.
    fn from_cell(cell: &str) -> Self;
}

/// Convert a cell to `T`.
///
/// # Example
/// ```
/// use tabular::convert::convert;
///
/// assert_eq!(convert::<i32>("10.5"), 10);
/// assert_eq!(convert::<f64>(" 10.5"), 10.5);
/// assert_eq!(convert::<String>("10.5"), "10.5");
/// assert_eq!(convert::<i32>("n/a"), 0);
/// ```
pub fn convert<T: FromCell>(cell: &str) -> T {
    T::from_cell(cell)
}

impl FromCell for String {
    fn from_cell(cell: &str) -> Self {
        cell.to_string()
    }
}

impl FromCell for bool {
    /// A non-zero integer prefix or a leading `true` (any case) is true;
    /// everything else is false.
    fn from_cell(cell: &str) -> Self {
        let rest = skip_whitespace(cell);
        if rest.get(..4).is_some_and(|word| word.eq_ignore_ascii_case("true")) {
            return true;
        }
        read_integer(cell) != 0
    }
}

macro_rules! impl_from_cell_int {
    ($($t:ty),*) => {
        $(
            impl FromCell for $t {
                fn from_cell(cell: &str) -> Self {
                    read_integer(cell).clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
                }
            }
        )*
    };
}

impl_from_cell_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromCell for i128 {
    fn from_cell(cell: &str) -> Self {
        read_integer(cell)
    }
}

impl FromCell for f64 {
    fn from_cell(cell: &str) -> Self {
        read_float(cell)
    }
}

impl FromCell for f32 {
    fn from_cell(cell: &str) -> Self {
        read_float(cell) as f32
    }
}

fn skip_whitespace(text: &str) -> &str {
    text.trim_start_matches([' ', '\t', '\n', '\r', '\x0c', '\x0b'])
}

/// Byte length of the optional sign at the start of `text`.
fn sign_len(text: &str) -> usize {
    match text.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    }
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Read a signed integer prefix, saturating on overflow. Zero if none.
fn read_integer(cell: &str) -> i128 {
    let text = skip_whitespace(cell);
    let sign = sign_len(text);
    let negative = text.starts_with('-');
    let digits = &text.as_bytes()[sign..];
    let n = digits_len(digits);

    let mut value: i128 = 0;
    for &d in &digits[..n] {
        let d = i128::from(d - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => value = v,
            None => return if negative { i128::MIN } else { i128::MAX },
        }
    }
    value
}

/// Read a decimal floating-point prefix (`[+-]digits[.digits][e[+-]digits]`).
/// Zero if none.
fn read_float(cell: &str) -> f64 {
    let text = skip_whitespace(cell);
    let bytes = text.as_bytes();

    let mut end = sign_len(text);
    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&text[exp_start..]);
        let exp_digits = digits_len(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
