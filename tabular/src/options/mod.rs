//! Read and write options.
//!
//! [`ReadOptions`] is a loose map of [`ReadArgument`] to [`DynamicValue`]
//! that callers fill with only what they need. It resolves into a typed
//! [`ReadSettings`] with defaults for the missing keys:
//!
//! | key              | default                              |
//! |------------------|--------------------------------------|
//! | `HEADER_PRESENT` | `true`                               |
//! | `SEPARATOR`      | `","`                                |
//! | `NEW_LINE`       | `"\r\n"` on Windows, `"\n"` otherwise |
//! | `AUTO_TRIM`      | `true`                               |
//!
//! Options can also be loaded from JSON:
//!
//! ```json
//! { "SEPARATOR": ";", "HEADER_PRESENT": false }
//! ```

pub mod dynamic;

pub use dynamic::DynamicValue;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Platform line terminator.
#[cfg(windows)]
pub const DEFAULT_NEW_LINE: &str = "\r\n";
/// Platform line terminator.
#[cfg(not(windows))]
pub const DEFAULT_NEW_LINE: &str = "\n";

/// Default cell separator.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Recognized read option keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadArgument {
    /// First line holds column names.
    HeaderPresent,
    /// Cell delimiter (literal substring).
    Separator,
    /// Line terminator (literal substring).
    NewLine,
    /// Strip whitespace around each cell.
    AutoTrim,
}

/// Sparse read options.
///
/// # Example
/// ```
/// use tabular::{ReadArgument, ReadOptions};
///
/// let settings = ReadOptions::new()
///     .with(ReadArgument::Separator, ";")
///     .with(ReadArgument::HeaderPresent, false)
///     .resolve();
///
/// assert_eq!(settings.separator, ";");
/// assert!(!settings.header_present);
/// assert!(settings.auto_trim);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadOptions {
    values: HashMap<ReadArgument, DynamicValue>,
}

impl ReadOptions {
    /// Empty options; every key takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` and return `self` for chaining.
    pub fn with(mut self, key: ReadArgument, value: impl Into<DynamicValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the previous value if any.
    pub fn insert(&mut self, key: ReadArgument, value: impl Into<DynamicValue>) -> Option<DynamicValue> {
        self.values.insert(key, value.into())
    }

    /// Value set for `key`, if any.
    pub fn get(&self, key: ReadArgument) -> Option<&DynamicValue> {
        self.values.get(&key)
    }

    /// Copy every key set in `other` over `self`.
    pub fn merge(&mut self, other: ReadOptions) {
        self.values.extend(other.values);
    }

    /// Fill in defaults and extract typed values.
    pub fn resolve(&self) -> ReadSettings {
        let defaults = ReadSettings::default();
        ReadSettings {
            header_present: self
                .get(ReadArgument::HeaderPresent)
                .map_or(defaults.header_present, |v| v.extract()),
            separator: self
                .get(ReadArgument::Separator)
                .map_or(defaults.separator, |v| v.extract()),
            new_line: self
                .get(ReadArgument::NewLine)
                .map_or(defaults.new_line, |v| v.extract()),
            auto_trim: self
                .get(ReadArgument::AutoTrim)
                .map_or(defaults.auto_trim, |v| v.extract()),
        }
    }
}

/// Fully resolved read options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadSettings {
    pub header_present: bool,
    pub separator: String,
    pub new_line: String,
    pub auto_trim: bool,
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            header_present: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            new_line: DEFAULT_NEW_LINE.to_string(),
            auto_trim: true,
        }
    }
}

impl From<&ReadOptions> for ReadSettings {
    fn from(options: &ReadOptions) -> Self {
        options.resolve()
    }
}

/// Options for writing a table back to delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Append to the destination instead of overwriting it.
    ///
    /// Output never ends with a line terminator, so appended text starts on
    /// the destination's last line unless that already ends with one. Write
    /// the terminator yourself first when appending rows to an existing file.
    #[serde(default)]
    pub append: bool,

    /// Emit the header line.
    #[serde(default = "default_true")]
    pub header: bool,

    /// Cell separator.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Line terminator placed between lines.
    #[serde(default = "default_write_new_line")]
    pub new_line: String,
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_write_new_line() -> String {
    "\n".to_string()
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            append: false,
            header: true,
            separator: default_separator(),
            new_line: default_write_new_line(),
        }
    }
}
