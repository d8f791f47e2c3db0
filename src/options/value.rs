//! Values carried by an options map

use core::fmt;

use serde_json::{Number, Value};

/// A single option value
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Number(Number),
    List(Vec<OptionValue>),
    Null,
}

impl OptionValue {
    /// Whether a boolean flag bound to this value should be emitted
    ///
    /// Empty text, zero, `false` and null are falsy; every list is truthy.
    #[must_use]
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match *self {
            Self::Bool(flag) => flag,
            Self::Text(ref text) => !text.is_empty(),
            Self::Number(ref number) => number
                .as_f64()
                .is_some_and(|n| n != 0.0_f64 && !n.is_nan()),
            Self::List(_) => true,
            Self::Null => false,
        }
    }
}

/// Plain textual form: no quoting or escaping
impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Text(ref text) => f.write_str(text),
            Self::Number(ref number) => write_number(f, number),
            Self::List(ref items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    // null list elements render empty
                    if *item != Self::Null {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Null => f.write_str("null"),
        }
    }
}

/// Whole floats print without a fraction (`1e3` as `1000`, `2.0` as `2`)
fn write_number(f: &mut fmt::Formatter<'_>, number: &Number) -> fmt::Result {
    match number.as_f64() {
        Some(n) if number.is_f64() && n.is_finite() && n.fract() == 0.0_f64 && n.abs() < 1e21_f64 => {
            if n == 0.0_f64 {
                f.write_str("0")
            } else {
                write!(f, "{n:.0}")
            }
        }
        _ => write!(f, "{number}"),
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for OptionValue {
    fn from(number: i64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<u64> for OptionValue {
    fn from(number: u64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl<T: Into<Self>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => items.into(),
            object @ Value::Object(_) => Self::Text(object.to_string()),
        }
    }
}
