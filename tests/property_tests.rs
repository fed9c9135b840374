//! Property-based tests for byte sizes, string conversion and type inference.

use proptest::prelude::*;
use scalarconv::{
    autotype, convert_to, to_byte_string, to_bytes, SiPrefix, TargetType, Value,
};

fn prefix_letter() -> impl Strategy<Value = (String, i32)> {
    (0usize..SiPrefix::ALL.len(), any::<bool>()).prop_map(|(index, upper)| {
        let tag = SiPrefix::ALL[index].as_str();
        let letter = if upper {
            tag.to_string()
        } else {
            tag.to_lowercase()
        };
        (letter, index as i32)
    })
}

fn unit_spelling() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "b", "B", "ib", "iB"])
}

proptest! {
    #[test]
    fn prop_prefixed_numerals_scale_by_1024(
        n in 0u32..1_000_000,
        (letter, power) in prefix_letter(),
        unit in unit_spelling(),
    ) {
        let input = format!("{}{}{}", n, letter, unit);
        let expected = n as f64 * 1024f64.powi(power);
        prop_assert_eq!(to_bytes(&input).unwrap(), expected);
    }

    #[test]
    fn prop_rendered_byte_counts_parse_back(bytes in 0i64..=i64::MAX) {
        let rendered = to_byte_string(bytes).unwrap();
        prop_assert!(rendered.ends_with('B'));
        prop_assert_eq!(to_bytes(&rendered).unwrap(), bytes as f64);
    }

    #[test]
    fn prop_string_conversion_is_idempotent_for_integers(n in any::<i64>()) {
        let once = convert_to(TargetType::String, n).unwrap();
        let twice = convert_to(TargetType::String, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_string_conversion_is_idempotent_for_text(s in ".*") {
        let once = convert_to(TargetType::String, s.as_str()).unwrap();
        prop_assert_eq!(&once, &Value::String(s.clone()));
        let twice = convert_to(TargetType::String, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_nonzero_integers_autotype_as_integers(n in any::<i64>()) {
        prop_assume!(n != 0);
        prop_assert_eq!(autotype(n), Value::Integer(n));
        prop_assert_eq!(autotype(n.to_string().as_str()), Value::Integer(n));
    }

    #[test]
    fn prop_fractional_floats_autotype_as_floats(x in -1.0e9f64..1.0e9) {
        prop_assume!(x.fract() != 0.0);
        prop_assert_eq!(autotype(x), Value::Float(x));
    }

    #[test]
    fn prop_autotype_never_panics(s in "\\PC*") {
        let value = autotype(s.as_str());
        prop_assert!(value.target_type() != TargetType::Invalid);
    }
}
