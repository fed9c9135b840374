//! Conversion targets and results.
//!
//! - [`TargetType`]: the type a caller asks [`convert_to`](crate::convert_to) for
//! - [`Value`]: the strongly-typed result of a conversion
//!
//! ```rust
//! use scalarconv::{convert_to, TargetType, Value};
//!
//! let value = convert_to(TargetType::Integer, "42").unwrap();
//! assert_eq!(value, Value::Integer(42));
//! assert!(value.is_integer());
//! assert_eq!(value.as_i64(), Some(42));
//! ```

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The type a conversion should produce.
///
/// `Invalid` and `String` both yield the canonical string form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    #[default]
    Invalid,
    String,
    Boolean,
    Float,
    Integer,
    Time,
}

impl TargetType {
    /// Returns the lowercase name of this target type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TargetType::Invalid => "invalid",
            TargetType::String => "string",
            TargetType::Boolean => "boolean",
            TargetType::Float => "float",
            TargetType::Integer => "integer",
            TargetType::Time => "time",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "invalid" => Ok(TargetType::Invalid),
            "string" => Ok(TargetType::String),
            "boolean" | "bool" => Ok(TargetType::Boolean),
            "float" => Ok(TargetType::Float),
            "integer" | "int" => Ok(TargetType::Integer),
            "time" => Ok(TargetType::Time),
            _ => Err(Error::custom(format!("unknown target type '{}'", s))),
        }
    }
}

/// The result of converting a scalar to a [`TargetType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Float(f64),
    Integer(i64),
    Time(DateTime<FixedOffset>),
}

impl Value {
    /// Returns the [`TargetType`] this value satisfies.
    #[must_use]
    pub const fn target_type(&self) -> TargetType {
        match self {
            Value::String(_) => TargetType::String,
            Value::Boolean(_) => TargetType::Boolean,
            Value::Float(_) => TargetType::Float,
            Value::Integer(_) => TargetType::Integer,
            Value::Time(_) => TargetType::Time,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the float, or the integer widened to `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarconv::Value;
    ///
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Boolean(true).as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Time(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns `true` if this is the zero-value time.
    #[must_use]
    pub fn is_zero_time(&self) -> bool {
        matches!(self, Value::Time(dt) if *dt == crate::time::zero_time())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Time(dt) => write!(f, "{}", dt),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Time(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

fn mismatch(expected: &str, value: &Value) -> Error {
    Error::custom(format!("expected {}, found {:?}", expected, value))
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(mismatch("integer", &value)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            _ => Err(mismatch("float", &value)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(mismatch("boolean", &value)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(mismatch("string", &value)),
        }
    }
}

impl TryFrom<Value> for DateTime<FixedOffset> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Time(dt) => Ok(dt),
            _ => Err(mismatch("time", &value)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Time(value)
    }
}
