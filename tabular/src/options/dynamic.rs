//! Heterogeneous option values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::convert::FromCell;

/// One of boolean, number or text.
///
/// Only used to carry read options of mixed types. Deserializes from plain
/// JSON scalars (`true`, `1.5`, `";"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl DynamicValue {
    /// Extract the value as `T`.
    ///
    /// The active variant is rendered as text (booleans as `1`/`0`,
    /// numbers in shortest form) and converted with [`FromCell`], so the
    /// same permissive rules as cell conversion apply.
    ///
    /// # Example
    /// ```
    /// use tabular::DynamicValue;
    ///
    /// assert!(DynamicValue::from(true).extract::<bool>());
    /// assert_eq!(DynamicValue::from(2.5).extract::<i32>(), 2);
    /// assert_eq!(DynamicValue::from(";").extract::<String>(), ";");
    /// ```
    pub fn extract<T: FromCell>(&self) -> T {
        T::from_cell(&self.as_text())
    }

    /// Text rendering used by [`DynamicValue::extract`].
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            DynamicValue::Boolean(b) => Cow::Borrowed(if *b { "1" } else { "0" }),
            DynamicValue::Number(n) => Cow::Owned(n.to_string()),
            DynamicValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Name of the active variant.
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicValue::Boolean(_) => "boolean",
            DynamicValue::Number(_) => "number",
            DynamicValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Boolean(value)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Number(value)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::Text(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_picks_variant() {
        assert_eq!(DynamicValue::from(false).kind(), "boolean");
        assert_eq!(DynamicValue::from(1.0).kind(), "number");
        assert_eq!(DynamicValue::from("x").kind(), "text");
        assert_eq!(DynamicValue::from(String::from("x")).kind(), "text");
    }

    #[test]
    fn test_extract_bool() {
        assert!(DynamicValue::from(true).extract::<bool>());
        assert!(!DynamicValue::from(false).extract::<bool>());
        assert!(DynamicValue::from(1.0).extract::<bool>());
        assert!(!DynamicValue::from(0.0).extract::<bool>());
        assert!(DynamicValue::from(2.0).extract::<bool>());
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(DynamicValue::from(10.5).extract::<f64>(), 10.5);
        assert_eq!(DynamicValue::from(10.5).extract::<i64>(), 10);
        assert_eq!(DynamicValue::from(true).extract::<i32>(), 1);
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(DynamicValue::from("\r\n").extract::<String>(), "\r\n");
        assert_eq!(DynamicValue::from(true).extract::<String>(), "1");
        assert_eq!(DynamicValue::from(3.0).extract::<String>(), "3");
    }

    #[test]
    fn test_clone_keeps_variant() {
        let original = DynamicValue::from(";");
        let copy = original.clone();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<DynamicValue> = serde_json::from_str(r#"[true, 2.5, ";"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                DynamicValue::Boolean(true),
                DynamicValue::Number(2.5),
                DynamicValue::Text(";".into()),
            ]
        );
    }
}
