//! printf-style rendering of a single float.
//!
//! [`NumberFormat`] understands format strings with exactly one float verb
//! (`%g`, `%G`, `%e`, `%E`, `%f`, `%F`), an optional `-` flag, width and
//! precision, `%%` escapes and literal text on either side.
//!
//! ```rust
//! use scalarconv::NumberFormat;
//!
//! let general = NumberFormat::default();
//! assert_eq!(general.format(1.5), "1.5");
//! assert_eq!(general.format(1500000.0), "1.5e+06");
//!
//! let fixed: NumberFormat = "%.2f ".parse().unwrap();
//! assert_eq!(fixed.format(1.5), "1.50 ");
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Largest accepted width or precision.
const MAX_FIELD: usize = 1_000_000;

/// The float conversion selected by a format verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Verb {
    /// `%g`: shortest of fixed or exponent notation
    #[default]
    General,
    /// `%e`: exponent notation
    Exponent,
    /// `%f`: fixed-point notation
    Fixed,
}

/// A parsed printf-style format for a single float.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct NumberFormat {
    pub prefix: String,
    pub suffix: String,
    pub verb: Verb,
    pub uppercase: bool,
    pub left_align: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    source: Option<String>,
}

impl NumberFormat {
    /// Creates the default `%g` format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a printf-style format string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the string has no verb, more than
    /// one verb, an unsupported verb or a dangling `%`, or when width or
    /// precision exceeds 1_000_000.
    pub fn parse(format: &str) -> Result<Self> {
        let mut out = NumberFormat {
            source: Some(format.to_string()),
            ..Default::default()
        };
        let mut seen_verb = false;
        let mut chars = format.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                if seen_verb {
                    out.suffix.push(ch);
                } else {
                    out.prefix.push(ch);
                }
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                if seen_verb {
                    out.suffix.push('%');
                } else {
                    out.prefix.push('%');
                }
                continue;
            }

            if seen_verb {
                return Err(Error::invalid_format(format, "more than one verb"));
            }

            while chars.peek() == Some(&'-') {
                chars.next();
                out.left_align = true;
            }

            out.width = take_number(&mut chars);
            if out.width.map_or(false, |w| w > MAX_FIELD) {
                return Err(Error::invalid_format(format, "width too large"));
            }

            if chars.peek() == Some(&'.') {
                chars.next();
                let precision = take_number(&mut chars).unwrap_or(0);
                if precision > MAX_FIELD {
                    return Err(Error::invalid_format(format, "precision too large"));
                }
                out.precision = Some(precision);
            }

            let verb = chars
                .next()
                .ok_or_else(|| Error::invalid_format(format, "missing verb"))?;

            out.verb = match verb.to_ascii_lowercase() {
                'g' => Verb::General,
                'e' => Verb::Exponent,
                'f' => Verb::Fixed,
                other => {
                    return Err(Error::invalid_format(
                        format,
                        &format!("unsupported verb '{}'", other),
                    ))
                }
            };
            out.uppercase = verb.is_ascii_uppercase();
            seen_verb = true;
        }

        if !seen_verb {
            return Err(Error::invalid_format(format, "missing verb"));
        }

        Ok(out)
    }

    /// Renders `value` using this format.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let body = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            let inf = if value > 0.0 { "+Inf" } else { "-Inf" };
            inf.to_string()
        } else {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            let magnitude = value.abs();
            let digits = match self.verb {
                Verb::General => format_general(magnitude, self.precision),
                Verb::Exponent => format_exponent(magnitude, self.precision.unwrap_or(6)),
                Verb::Fixed => format!("{:.*}", self.precision.unwrap_or(6), magnitude),
            };
            format!("{}{}", sign, digits)
        };

        let body = if self.uppercase {
            body.to_uppercase()
        } else {
            body
        };

        let padded = match self.width {
            Some(width) if self.left_align => format!("{:<width$}", body, width = width),
            Some(width) => format!("{:>width$}", body, width = width),
            None => body,
        };

        format!("{}{}{}", self.prefix, padded, self.suffix)
    }
}

impl FromStr for NumberFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NumberFormat::parse(s)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => f.write_str(source),
            None => f.write_str("%g"),
        }
    }
}

fn take_number<I>(chars: &mut std::iter::Peekable<I>) -> Option<usize>
where
    I: Iterator<Item = char>,
{
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    number
}

/// Decimal digits of a non-negative finite float with trailing zeros removed,
/// plus the position of the decimal point relative to the first digit.
struct Decimal {
    digits: String,
    point: i32,
}

impl Decimal {
    /// Shortest round-trip digits, or `significant` rounded digits.
    fn of(value: f64, significant: Option<usize>) -> Self {
        let sci = match significant {
            Some(n) => format!("{:.*e}", n.max(1) - 1, value),
            None => format!("{:e}", value),
        };
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }

        Decimal {
            digits,
            point: exponent + 1,
        }
    }

    fn exponent(&self) -> i32 {
        self.point - 1
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exponent.abs())
}

fn format_exponent(value: f64, precision: usize) -> String {
    let sci = format!("{:.*e}", precision, value);
    match sci.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}{}", mantissa, exponent_suffix(exponent.parse().unwrap_or(0)))
        }
        None => sci,
    }
}

fn format_general(value: f64, precision: Option<usize>) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let decimal = Decimal::of(value, precision);
    let significant = decimal.digits.len() as i32;

    let mut threshold = match precision {
        Some(p) => p.max(1) as i32,
        None => 6,
    };
    if precision.is_some() && threshold > significant && significant >= decimal.point {
        threshold = significant;
    }

    let exponent = decimal.exponent();
    if exponent < -4 || exponent >= threshold {
        let (head, tail) = decimal.digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{}.{}", head, tail)
        };
        return format!("{}{}", mantissa, exponent_suffix(exponent));
    }

    let decimals = (significant - decimal.point).max(0) as usize;
    let rounded: f64 = format!("{}e{}", decimal.digits, decimal.point - significant)
        .parse()
        .unwrap_or(value);
    format!("{:.*}", decimals, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(spec: &str, value: f64) -> String {
        NumberFormat::parse(spec).unwrap().format(value)
    }

    #[test]
    fn test_general_shortest() {
        assert_eq!(fmt("%g", 0.0), "0");
        assert_eq!(fmt("%g", 1.0), "1");
        assert_eq!(fmt("%g", 1.5), "1.5");
        assert_eq!(fmt("%g", 1023.0), "1023");
        assert_eq!(fmt("%g", 1.0009765625), "1.0009765625");
        assert_eq!(fmt("%g", 123456.0), "123456");
        assert_eq!(fmt("%g", 1234567.0), "1.234567e+06");
        assert_eq!(fmt("%g", 0.0001), "0.0001");
        assert_eq!(fmt("%g", 0.00001), "1e-05");
        assert_eq!(fmt("%g", -2.5), "-2.5");
    }

    #[test]
    fn test_general_with_precision() {
        assert_eq!(fmt("%.3g", 512.0), "512");
        assert_eq!(fmt("%.3g", 1500.0), "1.5e+03");
        assert_eq!(fmt("%.3g", 1.23456), "1.23");
        assert_eq!(fmt("%.2g", 0.5), "0.5");
    }

    #[test]
    fn test_fixed_and_exponent() {
        assert_eq!(fmt("%f", 1.5), "1.500000");
        assert_eq!(fmt("%.2f", 1.005), "1.00");
        assert_eq!(fmt("%.1f", 1023.96), "1024.0");
        assert_eq!(fmt("%e", 1500.0), "1.500000e+03");
        assert_eq!(fmt("%.2E", 0.00125), "1.25E-03");
    }

    #[test]
    fn test_width_and_literals() {
        assert_eq!(fmt("%6.2f", 1.5), "  1.50");
        assert_eq!(fmt("%-6.2f|", 1.5), "1.50  |");
        assert_eq!(fmt("~%g ", 2.0), "~2 ");
        assert_eq!(fmt("%g%%", 50.0), "50%");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(fmt("%g", f64::INFINITY), "+Inf");
        assert_eq!(fmt("%g", f64::NEG_INFINITY), "-Inf");
        assert_eq!(fmt("%f", f64::NAN), "NaN");
    }

    #[test]
    fn test_invalid_formats() {
        for bad in ["", "plain", "%", "%d", "%g%g", "%.2"] {
            let err = NumberFormat::parse(bad).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::InvalidFormat, "{bad}");
        }
    }

    #[test]
    fn test_oversized_fields_are_rejected() {
        let err = NumberFormat::parse("%99999999999999999999999g").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("width too large"), "{err}");

        let err = NumberFormat::parse("%.99999999999999999999999f").unwrap_err();
        assert!(err.to_string().contains("precision too large"), "{err}");

        assert!(NumberFormat::parse("%1000001g").is_err());
        assert!(NumberFormat::parse("%.1000001f").is_err());

        let widest = NumberFormat::parse("%1000000.2f").unwrap();
        assert_eq!(widest.width, Some(1_000_000));
    }

    #[test]
    fn test_display_keeps_source() {
        assert_eq!(NumberFormat::default().to_string(), "%g");
        assert_eq!(NumberFormat::parse("%.1f").unwrap().to_string(), "%.1f");
    }
}
