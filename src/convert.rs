//! The conversion engine.
//!
//! Every conversion goes through the canonical string form of its input, so
//! `3.0f64` converts to the integer `3` and `true` cannot be read as a number.
//!
//! ```rust
//! use scalarconv::{autotype, convert_to, TargetType, Value};
//!
//! assert_eq!(convert_to(TargetType::Float, "2.5").unwrap(), Value::Float(2.5));
//! assert_eq!(convert_to(TargetType::Boolean, "Yes").unwrap(), Value::Boolean(true));
//!
//! assert_eq!(autotype("on"), Value::Boolean(true));
//! assert_eq!(autotype("42"), Value::Integer(42));
//! assert_eq!(autotype("42.5"), Value::Float(42.5));
//! assert_eq!(autotype("hello"), Value::String("hello".to_string()));
//! ```

use crate::classify::{is_boolean_false, is_boolean_true};
use crate::time::parse_time;
use crate::{Error, Result, Scalar, TargetType, Value};
use chrono::{DateTime, FixedOffset};
use tracing::trace;

/// The order in which [`autotype`] tries target types.
pub const AUTOTYPE_ORDER: [TargetType; 5] = [
    TargetType::Boolean,
    TargetType::Time,
    TargetType::Integer,
    TargetType::Float,
    TargetType::String,
];

/// Renders the canonical string form of `value`.
///
/// # Examples
///
/// ```rust
/// use scalarconv::to_string;
///
/// assert_eq!(to_string(255u8), "255");
/// assert_eq!(to_string(0.25f32), "0.25");
/// assert_eq!(to_string(false), "false");
/// ```
#[must_use]
pub fn to_string<'a>(value: impl Into<Scalar<'a>>) -> String {
    let scalar: Scalar<'a> = value.into();
    scalar.render().into_owned()
}

/// Converts `value` to the requested target type.
///
/// `String` and `Invalid` return the canonical string unchanged.
///
/// # Errors
///
/// - [`Error::InvalidFloat`] / [`Error::InvalidInteger`] for numerals that do not parse
/// - [`Error::InvalidBoolean`] for strings outside the boolean literal sets
/// - [`Error::UnparseableTime`] for strings no time rule accepts
pub fn convert_to<'a>(target: TargetType, value: impl Into<Scalar<'a>>) -> Result<Value> {
    let scalar: Scalar<'a> = value.into();
    let text = scalar.render();
    convert_str(target, &text)
}

fn convert_str(target: TargetType, text: &str) -> Result<Value> {
    match target {
        TargetType::Float => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| Error::invalid_float(text, e)),
        TargetType::Integer => text
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| Error::invalid_integer(text, e)),
        TargetType::Boolean => {
            if is_boolean_true(text) {
                Ok(Value::Boolean(true))
            } else if is_boolean_false(text) {
                Ok(Value::Boolean(false))
            } else {
                Err(Error::InvalidBoolean(text.to_string()))
            }
        }
        TargetType::Time => parse_time(text).map(Value::Time),
        TargetType::String | TargetType::Invalid => Ok(Value::String(text.to_string())),
    }
}

/// Converts `value` to an `i64`.
///
/// # Errors
///
/// Returns the numeral parse error if the canonical string is not an integer.
pub fn convert_to_integer<'a>(value: impl Into<Scalar<'a>>) -> Result<i64> {
    convert_to(TargetType::Integer, value)?.try_into()
}

/// Converts `value` to an `f64`.
///
/// # Errors
///
/// Returns the numeral parse error if the canonical string is not a float.
pub fn convert_to_float<'a>(value: impl Into<Scalar<'a>>) -> Result<f64> {
    convert_to(TargetType::Float, value)?.try_into()
}

/// Converts `value` to its canonical string. Never fails for a [`Scalar`].
///
/// # Errors
///
/// Kept fallible for symmetry with the other typed conversions.
pub fn convert_to_string<'a>(value: impl Into<Scalar<'a>>) -> Result<String> {
    convert_to(TargetType::String, value)?.try_into()
}

/// Converts `value` to a `bool` using the `true/yes/on` and `false/no/off` sets.
///
/// # Errors
///
/// Returns [`Error::InvalidBoolean`] for anything else.
pub fn convert_to_bool<'a>(value: impl Into<Scalar<'a>>) -> Result<bool> {
    convert_to(TargetType::Boolean, value)?.try_into()
}

/// Converts `value` to a date/time. Date/time inputs are returned as is.
///
/// # Errors
///
/// Returns [`Error::UnparseableTime`] if no time rule accepts the input.
///
/// # Examples
///
/// ```rust
/// use scalarconv::convert_to_time;
/// use chrono::Datelike;
///
/// let dt = convert_to_time("2024-03-14 09:30:00").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
pub fn convert_to_time<'a>(value: impl Into<Scalar<'a>>) -> Result<DateTime<FixedOffset>> {
    let scalar: Scalar<'a> = value.into();
    match scalar {
        Scalar::Time(dt) => Ok(dt),
        other => convert_to(TargetType::Time, other)?.try_into(),
    }
}

/// Infers the most specific type for `value`.
///
/// Types are tried in [`AUTOTYPE_ORDER`]: booleans before anything numeric so
/// `"on"`/`"off"` stay booleans, and integers before floats so whole numbers
/// are not widened. The string fallback always succeeds.
///
/// All-zero numerals such as `"0"` match the zero-time rule before the
/// integer rule and therefore autotype to the zero time.
#[must_use]
pub fn autotype<'a>(value: impl Into<Scalar<'a>>) -> Value {
    let scalar: Scalar<'a> = value.into();
    let text = scalar.render();

    for target in AUTOTYPE_ORDER {
        if let Ok(converted) = convert_str(target, &text) {
            trace!(%target, input = %text, "autotype resolved");
            return converted;
        }
    }

    Value::String(text.into_owned())
}
