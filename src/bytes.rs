//! Human byte-size strings.
//!
//! Sizes use binary multipliers regardless of spelling: `k`, `K`, `KB`, `Kb`,
//! `KiB` and `Kib` all mean 1024.
//!
//! ```rust
//! use scalarconv::{to_bytes, to_byte_string};
//!
//! assert_eq!(to_bytes("4k").unwrap(), 4096.0);
//! assert_eq!(to_bytes("2.5GiB").unwrap(), 2.5 * 1024.0 * 1024.0 * 1024.0);
//! assert_eq!(to_bytes("42").unwrap(), 42.0);
//!
//! assert_eq!(to_byte_string(1536).unwrap(), "1.5KB");
//! ```

use crate::convert::convert_to_integer;
use crate::{ByteStringOptions, Error, Result, Scalar};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A binary magnitude prefix; each step multiplies by 1024.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SiPrefix {
    #[default]
    None,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl SiPrefix {
    /// All prefixes in ascending magnitude.
    pub const ALL: [SiPrefix; 9] = [
        SiPrefix::None,
        SiPrefix::Kilo,
        SiPrefix::Mega,
        SiPrefix::Giga,
        SiPrefix::Tera,
        SiPrefix::Peta,
        SiPrefix::Exa,
        SiPrefix::Zetta,
        SiPrefix::Yotta,
    ];

    /// Returns the power of 1024 this prefix stands for.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u32 {
        *self as u32
    }

    /// Returns the prefix for a power of 1024, if there is one.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns `1024^index` as a float.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        1024f64.powi(self.index() as i32)
    }

    /// Returns the canonical single-letter tag (empty for [`SiPrefix::None`]).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SiPrefix::None => "",
            SiPrefix::Kilo => "K",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_si_prefix(s)
    }
}

/// Resolves a unit letter to its prefix.
///
/// `""`, `"b"` and `"B"` mean plain bytes; prefix letters are case-insensitive.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedUnit`] for anything else.
///
/// # Examples
///
/// ```rust
/// use scalarconv::{parse_si_prefix, SiPrefix};
///
/// assert_eq!(parse_si_prefix("g").unwrap(), SiPrefix::Giga);
/// assert_eq!(parse_si_prefix("B").unwrap(), SiPrefix::None);
/// assert!(parse_si_prefix("X").is_err());
/// ```
pub fn parse_si_prefix(unit: &str) -> Result<SiPrefix> {
    match unit {
        "" | "b" | "B" => Ok(SiPrefix::None),
        "k" | "K" => Ok(SiPrefix::Kilo),
        "m" | "M" => Ok(SiPrefix::Mega),
        "g" | "G" => Ok(SiPrefix::Giga),
        "t" | "T" => Ok(SiPrefix::Tera),
        "p" | "P" => Ok(SiPrefix::Peta),
        "e" | "E" => Ok(SiPrefix::Exa),
        "z" | "Z" => Ok(SiPrefix::Zetta),
        "y" | "Y" => Ok(SiPrefix::Yotta),
        _ => Err(Error::UnrecognizedUnit(unit.to_string())),
    }
}

/// Parses a human size string into a byte count.
///
/// Suffix handling, in order:
///
/// 1. a trailing `ib`/`iB` is dropped (`KiB`, `Gib`)
/// 2. otherwise a trailing `b`/`B` is dropped when the character three from
///    the end is a digit (`10KB`, `1.5Gb`), so a numeral followed by a prefix
///    letter and `b` is not mistaken for a prefix
/// 3. the last character is resolved as a prefix and the rest parsed as the
///    numeral; if it is not a prefix the whole string is parsed unscaled
///
/// # Errors
///
/// - [`Error::InvalidFloat`] when a prefix is recognized but the numeral is not
/// - [`Error::UnrecognizedInput`] when the string is not a numeral at all
///
/// # Examples
///
/// ```rust
/// use scalarconv::{to_bytes, ErrorKind};
///
/// assert_eq!(to_bytes("0.5k").unwrap(), 512.0);
/// assert_eq!(to_bytes("-1M").unwrap(), -1048576.0);
/// assert_eq!(to_bytes("10KB").unwrap(), 10240.0);
///
/// assert_eq!(to_bytes("123X").unwrap_err().kind(), ErrorKind::UnrecognizedInput);
/// assert_eq!(to_bytes("potatoG").unwrap_err().kind(), ErrorKind::InvalidNumeral);
/// ```
pub fn to_bytes(input: &str) -> Result<f64> {
    let mut numeral = input;

    if numeral.ends_with("ib") || numeral.ends_with("iB") {
        numeral = &numeral[..numeral.len() - 2];
    } else if has_bare_byte_suffix(numeral) {
        numeral = &numeral[..numeral.len() - 1];
    }

    let Some((split, unit)) = numeral.char_indices().last() else {
        return Err(Error::UnrecognizedInput(input.to_string()));
    };

    let mut buf = [0u8; 4];
    match parse_si_prefix(unit.encode_utf8(&mut buf)) {
        Ok(prefix) => {
            let mantissa = &numeral[..split];
            let value = mantissa
                .parse::<f64>()
                .map_err(|e| Error::invalid_float(mantissa, e))?;
            debug!(input, %prefix, value, "resolved byte-size prefix");
            Ok(value * prefix.multiplier())
        }
        Err(_) => numeral
            .parse::<f64>()
            .map_err(|_| Error::UnrecognizedInput(input.to_string())),
    }
}

#[inline]
fn has_bare_byte_suffix(s: &str) -> bool {
    let bytes = s.as_bytes();
    let len = bytes.len();
    len > 2 && bytes[len - 3].is_ascii_digit() && matches!(bytes[len - 1], b'b' | b'B')
}

/// Renders a byte count with the smallest prefix whose mantissa is below 1024.
///
/// The input goes through the integer conversion first, so strings and
/// floats with integral values are accepted.
///
/// # Errors
///
/// Propagates the integer conversion error unchanged.
///
/// # Examples
///
/// ```rust
/// use scalarconv::to_byte_string;
///
/// assert_eq!(to_byte_string(0).unwrap(), "0B");
/// assert_eq!(to_byte_string(1023).unwrap(), "1023B");
/// assert_eq!(to_byte_string("1048576").unwrap(), "1MB");
/// assert!(to_byte_string("lots").is_err());
/// ```
pub fn to_byte_string<'a>(value: impl Into<Scalar<'a>>) -> Result<String> {
    to_byte_string_with_options(value, &ByteStringOptions::default())
}

/// Renders a byte count using a custom mantissa format.
///
/// Counts of `1024^9` bytes and beyond have no prefix and render as the raw
/// count in fixed-point notation.
///
/// # Errors
///
/// Propagates the integer conversion error unchanged.
pub fn to_byte_string_with_options<'a>(
    value: impl Into<Scalar<'a>>,
    options: &ByteStringOptions,
) -> Result<String> {
    let bytes = convert_to_integer(value)?;

    for prefix in SiPrefix::ALL {
        let candidate = bytes as f64 / prefix.multiplier();
        if candidate < 1024.0 {
            return Ok(format!("{}{}B", options.format.format(candidate), prefix));
        }
    }

    Ok(format!("{:.6}B", bytes as f64))
}
