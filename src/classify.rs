//! Predicates that answer "does this string look like X?".
//!
//! None of these fail: a string that does not match is simply `false`.
//!
//! ```rust
//! use scalarconv::classify;
//!
//! assert!(classify::is_integer("-42"));
//! assert!(classify::is_float("42"));
//! assert!(classify::is_boolean("Off"));
//! assert!(!classify::is_boolean("maybe"));
//! ```

const TRUE_LITERALS: [&str; 3] = ["true", "yes", "on"];
const FALSE_LITERALS: [&str; 3] = ["false", "no", "off"];

/// Returns `true` if `s` is a base-10 integer that fits the native signed width.
#[inline]
#[must_use]
pub fn is_integer(s: &str) -> bool {
    s.parse::<isize>().is_ok()
}

/// Returns `true` if `s` is a 64-bit floating-point literal (integers included).
#[inline]
#[must_use]
pub fn is_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Returns `true` for `true`, `yes` or `on`, ignoring case.
#[must_use]
pub fn is_boolean_true(s: &str) -> bool {
    TRUE_LITERALS.iter().any(|lit| s.eq_ignore_ascii_case(lit))
}

/// Returns `true` for `false`, `no` or `off`, ignoring case.
#[must_use]
pub fn is_boolean_false(s: &str) -> bool {
    FALSE_LITERALS.iter().any(|lit| s.eq_ignore_ascii_case(lit))
}

/// Returns `true` if `s` is any boolean literal, true or false.
#[inline]
#[must_use]
pub fn is_boolean(s: &str) -> bool {
    is_boolean_true(s) || is_boolean_false(s)
}

/// Returns `true` if `s` contains both an uppercase and a lowercase letter.
///
/// # Examples
///
/// ```rust
/// use scalarconv::classify::is_mixed_case;
///
/// assert!(is_mixed_case("Hello"));
/// assert!(!is_mixed_case("HELLO 123"));
/// ```
#[must_use]
pub fn is_mixed_case(s: &str) -> bool {
    let mut upper = false;
    let mut lower = false;

    for ch in s.chars() {
        upper |= ch.is_uppercase();
        lower |= ch.is_lowercase();

        if upper && lower {
            return true;
        }
    }

    false
}

/// Returns `true` if `s` is made only of hex digits in a single letter case.
///
/// When `length` is given, `s` must also be exactly that many characters long.
///
/// # Examples
///
/// ```rust
/// use scalarconv::classify::is_hexadecimal;
///
/// assert!(is_hexadecimal("abc123", None));
/// assert!(is_hexadecimal("ABC123", Some(6)));
/// assert!(!is_hexadecimal("aBc123", None));
/// assert!(!is_hexadecimal("abc123", Some(32)));
/// ```
#[must_use]
pub fn is_hexadecimal(s: &str, length: Option<usize>) -> bool {
    if s.is_empty() {
        return false;
    }

    if let Some(expected) = length {
        if s.chars().count() != expected {
            return false;
        }
    }

    let mut seen_lower = false;
    let mut seen_upper = false;

    for ch in s.chars() {
        match ch {
            '0'..='9' => {}
            'a'..='f' => seen_lower = true,
            'A'..='F' => seen_upper = true,
            _ => return false,
        }
    }

    !(seen_lower && seen_upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("-17"));
        assert!(is_integer("+17"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("99999999999999999999999"));
    }

    #[test]
    fn test_is_float() {
        assert!(is_float("1"));
        assert!(is_float("-1.25"));
        assert!(is_float("1e10"));
        assert!(!is_float("1.2.3"));
        assert!(!is_float("one"));
    }

    #[test]
    fn test_boolean_literals() {
        for lit in ["true", "TRUE", "Yes", "on", "ON"] {
            assert!(is_boolean_true(lit), "{lit}");
            assert!(!is_boolean_false(lit), "{lit}");
            assert!(is_boolean(lit));
        }

        for lit in ["false", "No", "OFF"] {
            assert!(is_boolean_false(lit), "{lit}");
            assert!(!is_boolean_true(lit), "{lit}");
            assert!(is_boolean(lit));
        }

        for lit in ["", "1", "0", "y", "maybe", " true"] {
            assert!(!is_boolean(lit), "{lit}");
        }
    }

    #[test]
    fn test_is_mixed_case() {
        assert!(!is_mixed_case(""));
        assert!(!is_mixed_case("0123456789"));
        assert!(!is_mixed_case("abcdefghijklm0123456789nopqrstuvwxyz"));
        assert!(!is_mixed_case(" ABCDEFGHIJKLM 0123456789 NOPQRSTUVWXYZ "));
        assert!(!is_mixed_case("сою́з"));
        assert!(!is_mixed_case("СОЮ́З"));

        assert!(is_mixed_case("AbCdEfGhIjKlMnOpQrStUvWxYz"));
        assert!(is_mixed_case("ABCDEFGHIJKLM0123456789nopqrstuvwxyz"));
        assert!(is_mixed_case("Сою́з"));
    }

    #[test]
    fn test_is_hexadecimal() {
        for i in 0..16 {
            assert!(is_hexadecimal(&format!("{:x}", i), None));
            assert!(is_hexadecimal(&format!("{:X}", i), None));
        }

        for i in 10..16 {
            assert!(!is_hexadecimal(&format!("{:x}{:X}", i, i), None));
            assert!(!is_hexadecimal(&format!("{:x}", i), Some(2)));
        }

        assert!(is_hexadecimal(
            "b26252862a11dd3221427bdbae6025604b1760e4",
            Some(40)
        ));
        assert!(!is_hexadecimal("", None));
        assert!(!is_hexadecimal("xyz", None));
        assert!(!is_hexadecimal("ABC123", Some(32)));
    }
}
