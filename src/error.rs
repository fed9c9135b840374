//! Error types for scalar conversion and byte-size parsing.
//!
//! Every failure carries the offending input so callers can report it, and
//! [`Error::kind`] exposes a copyable [`ErrorKind`] for branching without
//! matching on payloads.
//!
//! ## Examples
//!
//! ```rust
//! use scalarconv::{convert_to_bool, ErrorKind};
//!
//! let err = convert_to_bool("maybe").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidBoolean);
//! assert!(err.to_string().contains("maybe"));
//! ```

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Represents all possible errors raised while converting scalars or byte sizes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source value has no canonical string rendering
    #[error("Unable to convert type '{0}' to string")]
    UnsupportedType(String),

    /// A byte-size suffix letter is not a known SI prefix
    #[error("Unrecognized SI unit '{0}'")]
    UnrecognizedUnit(String),

    /// A numeral failed to parse as a 64-bit float
    #[error("Invalid numeral '{input}': {source}")]
    InvalidFloat {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// A numeral failed to parse as a 64-bit signed integer
    #[error("Invalid numeral '{input}': {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// A byte-size string is neither a prefixed nor a bare numeral
    #[error("Unrecognized input string '{0}'")]
    UnrecognizedInput(String),

    /// The string matches neither boolean literal set
    #[error("Cannot convert '{0}' into a boolean value")]
    InvalidBoolean(String),

    /// The string matches no recognized date/time layout
    #[error("Cannot convert '{0}' into a date/time value")]
    UnparseableTime(String),

    /// A numeric format string could not be understood
    #[error("Invalid format string '{format}': {msg}")]
    InvalidFormat { format: String, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// The category of an [`Error`], independent of its contextual payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::UnsupportedType`]
    UnsupportedType,
    /// See [`Error::UnrecognizedUnit`]
    UnrecognizedUnit,
    /// A float or integer numeral failed to parse
    InvalidNumeral,
    /// See [`Error::UnrecognizedInput`]
    UnrecognizedInput,
    /// See [`Error::InvalidBoolean`]
    InvalidBoolean,
    /// See [`Error::UnparseableTime`]
    UnparseableTime,
    /// See [`Error::InvalidFormat`]
    InvalidFormat,
    /// A custom message, usually from serde
    Custom,
}

impl Error {
    /// Returns the category of this error.
    ///
    /// Float and integer parse failures share [`ErrorKind::InvalidNumeral`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Error::UnrecognizedUnit(_) => ErrorKind::UnrecognizedUnit,
            Error::InvalidFloat { .. } | Error::InvalidInteger { .. } => {
                ErrorKind::InvalidNumeral
            }
            Error::UnrecognizedInput(_) => ErrorKind::UnrecognizedInput,
            Error::InvalidBoolean(_) => ErrorKind::InvalidBoolean,
            Error::UnparseableTime(_) => ErrorKind::UnparseableTime,
            Error::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Creates an unsupported type error naming the concrete source type.
    pub fn unsupported_type(type_name: &str) -> Self {
        Error::UnsupportedType(type_name.to_string())
    }

    /// Creates a float parse error for `input`.
    pub fn invalid_float(input: &str, source: ParseFloatError) -> Self {
        Error::InvalidFloat {
            input: input.to_string(),
            source,
        }
    }

    /// Creates an integer parse error for `input`.
    pub fn invalid_integer(input: &str, source: ParseIntError) -> Self {
        Error::InvalidInteger {
            input: input.to_string(),
            source,
        }
    }

    /// Creates an invalid format error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarconv::Error;
    ///
    /// let err = Error::invalid_format("%q", "unknown verb 'q'");
    /// assert!(err.to_string().contains("%q"));
    /// ```
    pub fn invalid_format(format: &str, msg: &str) -> Self {
        Error::InvalidFormat {
            format: format.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
