//! Input values accepted by the conversion engine.
//!
//! [`Scalar`] is a closed set of the primitive kinds a loosely-typed source can
//! hand over, plus a borrowed [`fmt::Display`] capability for anything else that
//! knows how to render itself.
//!
//! ```rust
//! use scalarconv::Scalar;
//!
//! assert_eq!(Scalar::from(42u8).render(), "42");
//! assert_eq!(Scalar::from(0.1f32).render(), "0.1");
//! assert_eq!(Scalar::from("text").render(), "text");
//!
//! let ip = std::net::Ipv4Addr::LOCALHOST;
//! assert_eq!(Scalar::display(&ip).render(), "127.0.0.1");
//! ```

use crate::value::Value;
use chrono::{DateTime, FixedOffset, Utc};
use std::borrow::Cow;
use std::fmt;

/// A caller-supplied value to be converted.
///
/// Integer widths are widened to `i64`/`u64`; `f32` is kept distinct so it
/// renders with its own shortest round-trip digits.
#[derive(Clone, Copy)]
pub enum Scalar<'a> {
    Signed(i64),
    Unsigned(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Text(&'a str),
    Time(DateTime<FixedOffset>),
    Display(&'a dyn fmt::Display),
}

/// An owned counterpart of [`Scalar`], produced by the serde bridge.
#[derive(Clone, Debug, PartialEq)]
pub enum OwnedScalar {
    Signed(i64),
    Unsigned(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Text(String),
}

impl<'a> Scalar<'a> {
    /// Wraps any value exposing a string rendering.
    #[must_use]
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Scalar::Display(value)
    }

    /// Renders the canonical string form of this value.
    ///
    /// Floats use the shortest decimal that round-trips at their own width and
    /// never switch to exponent notation. Non-finite floats render as `NaN`,
    /// `+Inf` and `-Inf`.
    #[must_use]
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            Scalar::Signed(v) => Cow::Owned(v.to_string()),
            Scalar::Unsigned(v) => Cow::Owned(v.to_string()),
            Scalar::Float32(v) => render_float(v, v as f64),
            Scalar::Float64(v) => render_float(v, v),
            Scalar::Bool(v) => Cow::Borrowed(if v { "true" } else { "false" }),
            Scalar::Text(s) => Cow::Borrowed(s),
            Scalar::Time(dt) => Cow::Owned(dt.to_string()),
            Scalar::Display(d) => Cow::Owned(d.to_string()),
        }
    }

    /// Returns the name of the source kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Signed(_) => "signed integer",
            Scalar::Unsigned(_) => "unsigned integer",
            Scalar::Float32(_) => "f32",
            Scalar::Float64(_) => "f64",
            Scalar::Bool(_) => "bool",
            Scalar::Text(_) => "string",
            Scalar::Time(_) => "date/time",
            Scalar::Display(_) => "display",
        }
    }
}

fn render_float<'a, F: fmt::Display>(value: F, wide: f64) -> Cow<'a, str> {
    if wide.is_nan() {
        Cow::Borrowed("NaN")
    } else if wide.is_infinite() {
        Cow::Borrowed(if wide > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        Cow::Owned(value.to_string())
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar::{}({:?})", self.kind_name(), self.render())
    }
}

impl OwnedScalar {
    /// Borrows this value as a [`Scalar`].
    #[must_use]
    pub fn as_scalar(&self) -> Scalar<'_> {
        match self {
            OwnedScalar::Signed(v) => Scalar::Signed(*v),
            OwnedScalar::Unsigned(v) => Scalar::Unsigned(*v),
            OwnedScalar::Float32(v) => Scalar::Float32(*v),
            OwnedScalar::Float64(v) => Scalar::Float64(*v),
            OwnedScalar::Bool(v) => Scalar::Bool(*v),
            OwnedScalar::Text(s) => Scalar::Text(s),
        }
    }
}

impl<'a> From<&'a OwnedScalar> for Scalar<'a> {
    fn from(value: &'a OwnedScalar) -> Self {
        value.as_scalar()
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar<'_> {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Signed, i64, i8, i16, i32, i64, isize);
impl_from_int!(Unsigned, u64, u8, u16, u32, u64, usize);

impl From<f32> for Scalar<'_> {
    fn from(value: f32) -> Self {
        Scalar::Float32(value)
    }
}

impl From<f64> for Scalar<'_> {
    fn from(value: f64) -> Self {
        Scalar::Float64(value)
    }
}

impl From<bool> for Scalar<'_> {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(value: &'a str) -> Self {
        Scalar::Text(value)
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    fn from(value: &'a String) -> Self {
        Scalar::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for Scalar<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Scalar::Time(value)
    }
}

impl From<DateTime<Utc>> for Scalar<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::Time(value.into())
    }
}

impl<'a> From<&'a Value> for Scalar<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Scalar::Text(s),
            Value::Boolean(b) => Scalar::Bool(*b),
            Value::Float(f) => Scalar::Float64(*f),
            Value::Integer(i) => Scalar::Signed(*i),
            Value::Time(dt) => Scalar::Time(*dt),
        }
    }
}
