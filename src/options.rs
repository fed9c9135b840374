//! Configuration options for byte-size rendering.
//!
//! ## Examples
//!
//! ```rust
//! use scalarconv::{to_byte_string_with_options, ByteStringOptions};
//!
//! let options = ByteStringOptions::new().with_format_str("%.2f").unwrap();
//! assert_eq!(to_byte_string_with_options(1536, &options).unwrap(), "1.50KB");
//! ```

use crate::{NumberFormat, Result};

/// Configuration options for [`to_byte_string_with_options`](crate::to_byte_string_with_options).
///
/// # Examples
///
/// ```rust
/// use scalarconv::{ByteStringOptions, NumberFormat};
///
/// // Default `%g` rendering
/// let options = ByteStringOptions::new();
/// assert_eq!(options.format, NumberFormat::default());
///
/// // Fixed two decimals
/// let options = ByteStringOptions::new().with_format_str("%.2f").unwrap();
/// assert_eq!(options.format.precision, Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ByteStringOptions {
    pub format: NumberFormat,
}

impl ByteStringOptions {
    /// Creates default options (`%g` mantissa).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mantissa format.
    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Parses and sets a printf-style mantissa format such as `"%.1f"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format string is malformed.
    pub fn with_format_str(self, format: &str) -> Result<Self> {
        Ok(self.with_format(NumberFormat::parse(format)?))
    }
}
