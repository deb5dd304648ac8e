//! Loosely typed scalar fields.
//!
//! A few record fields (semester, money goal) arrive as either text or
//! numbers. The table shows them only when they are "truthy": empty text,
//! zero and `false` all count as absent.

use serde::Deserialize;
use std::fmt;

/// A JSON scalar that may be text, a number or a boolean.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Whether the value counts as present for display purposes.
    ///
    /// `""`, `0`, `0.0`, NaN and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Scalar::Text(s) => !s.is_empty(),
        }
    }

    /// Display text when truthy, `None` otherwise.
    pub fn truthy_text(&self) -> Option<String> {
        self.is_truthy().then(|| self.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    return write!(f, "{n}");
                }
                match n.as_f64() {
                    // Integral floats print without a fractional part.
                    Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.0}"),
                    Some(v) => write!(f, "{v}"),
                    None => write!(f, "{n}"),
                }
            }
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}
