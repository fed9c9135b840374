use chrono::{Datelike, Timelike};
use scalarconv::classify::{is_boolean, is_float, is_hexadecimal, is_integer, is_mixed_case};
use scalarconv::{
    autotype, convert_to, convert_to_bool, convert_to_float, convert_to_integer,
    convert_to_string, convert_to_time, parse_time, to_byte_string_with_options, to_scalar,
    to_string, zero_time, ByteStringOptions, ErrorKind, NumberFormat, Scalar, TargetType,
    TimeLayout, Value,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
struct ServerConfig {
    name: String,
    #[serde(deserialize_with = "scalarconv::de::byte_size_u64")]
    max_body: u64,
    #[serde(deserialize_with = "scalarconv::de::boolean")]
    compress: bool,
    #[serde(deserialize_with = "scalarconv::de::autotyped")]
    timeout: Value,
}

#[derive(Serialize)]
struct Celsius(f64);

#[test]
fn test_classifier_agrees_with_conversion() {
    for input in ["0", "-12", "9223372036854775807", "12.5", "1e3", "yes", "off", "x", ""] {
        assert_eq!(
            is_integer(input),
            convert_to_integer(input).is_ok(),
            "integer: {input}"
        );
        assert_eq!(is_float(input), convert_to_float(input).is_ok(), "float: {input}");
        assert_eq!(is_boolean(input), convert_to_bool(input).is_ok(), "bool: {input}");
    }
}

#[test]
fn test_classifier_text_shapes() {
    assert!(is_mixed_case("camelCase"));
    assert!(!is_mixed_case("lower_only"));
    assert!(is_hexadecimal("deadbeef", None));
    assert!(is_hexadecimal("DEADBEEF", None));
    assert!(!is_hexadecimal("deadBEEF", None));
    assert!(is_hexadecimal("0f0f", Some(4)));
    assert!(!is_hexadecimal("0f0f", Some(8)));
}

#[test]
fn test_to_string_of_every_scalar_kind() {
    let ip = std::net::Ipv6Addr::LOCALHOST;

    assert_eq!(to_string(-5i8), "-5");
    assert_eq!(to_string(u64::MAX), "18446744073709551615");
    assert_eq!(to_string(0.1f32), "0.1");
    assert_eq!(to_string(1e21f64), "1000000000000000000000");
    assert_eq!(to_string(true), "true");
    assert_eq!(to_string("as is"), "as is");
    assert_eq!(to_string(&String::from("owned")), "owned");
    assert_eq!(to_string(Scalar::display(&ip)), "::1");
}

#[test]
fn test_convert_to_each_target() {
    assert_eq!(convert_to(TargetType::Integer, "42").unwrap(), Value::Integer(42));
    assert_eq!(convert_to(TargetType::Float, "42").unwrap(), Value::Float(42.0));
    assert_eq!(convert_to(TargetType::Boolean, "No").unwrap(), Value::Boolean(false));
    assert_eq!(
        convert_to(TargetType::String, 42).unwrap(),
        Value::String("42".to_string())
    );

    let value = convert_to(TargetType::Time, "2024-03-14T09:30:00+02:00").unwrap();
    let time = value.as_time().unwrap();
    assert_eq!(time.hour(), 9);
    assert_eq!(time.offset().local_minus_utc(), 2 * 3600);
}

#[test]
fn test_conversion_errors_carry_kind_and_input() {
    let cases = [
        (TargetType::Integer, "forty", ErrorKind::InvalidNumeral),
        (TargetType::Float, "1,5", ErrorKind::InvalidNumeral),
        (TargetType::Boolean, "nope", ErrorKind::InvalidBoolean),
        (TargetType::Time, "yesterday", ErrorKind::UnparseableTime),
    ];

    for (target, input, kind) in cases {
        let err = convert_to(target, input).unwrap_err();
        assert_eq!(err.kind(), kind, "{target} {input}");
        assert!(err.to_string().contains(input), "{err}");
    }
}

#[test]
fn test_target_type_names() {
    for target in [
        TargetType::String,
        TargetType::Boolean,
        TargetType::Float,
        TargetType::Integer,
        TargetType::Time,
    ] {
        assert_eq!(target.as_str().parse::<TargetType>().unwrap(), target);
    }

    let json = serde_json::to_string(&TargetType::Integer).unwrap();
    assert_eq!(json, "\"integer\"");
}

#[test]
fn test_time_layouts() {
    let inputs = [
        "2024-03-14 09:30:00",
        "2024-03-14 09:30:00 +0000 UTC",
        "2024-03-14T09:30:00Z",
        "Thu Mar 14 09:30:00 2024",
        "Thu Mar 14 09:30:00 UTC 2024",
        "Thu Mar 14 09:30:00 +0000 2024",
        "Thu, 14 Mar 2024 09:30:00 +0000",
    ];

    for input in inputs {
        let dt = parse_time(input).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 14), "{input}");
        assert_eq!((dt.hour(), dt.minute()), (9, 30), "{input}");
    }

    let kitchen = TimeLayout::Kitchen.parse("3:04PM").unwrap();
    assert_eq!((kitchen.year(), kitchen.hour(), kitchen.minute()), (0, 15, 4));
}

#[test]
fn test_zero_and_now() {
    assert_eq!(convert_to_time("0000-00-00 00:00:00").unwrap(), zero_time());
    assert!(autotype("0").is_zero_time());

    let before = chrono::Utc::now().timestamp();
    let now = convert_to_time("now").unwrap();
    assert!(now.timestamp() >= before);
}

#[test]
fn test_autotype_matches_expected_kinds() {
    let cases = [
        ("true", TargetType::Boolean),
        ("Off", TargetType::Boolean),
        ("2024-03-14 09:30:00", TargetType::Time),
        ("1024", TargetType::Integer),
        ("-0.25", TargetType::Float),
        ("NaN", TargetType::Float),
        ("4k", TargetType::String),
    ];

    for (input, expected) in cases {
        assert_eq!(autotype(input).target_type(), expected, "{input}");
    }
}

#[test]
fn test_typed_wrappers() {
    assert_eq!(convert_to_integer(7.0f32).unwrap(), 7);
    assert_eq!(convert_to_float("0.125").unwrap(), 0.125);
    assert_eq!(convert_to_string(false).unwrap(), "false");
    assert!(convert_to_bool("on").unwrap());
    assert_eq!(convert_to_time(zero_time()).unwrap(), zero_time());
}

#[test]
fn test_serde_bridge_feeds_conversions() {
    let scalar = to_scalar(&Celsius(21.5)).unwrap();
    assert_eq!(autotype(&scalar), Value::Float(21.5));

    let err = to_scalar(&vec!["a", "b"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    assert!(err.to_string().starts_with("Unable to convert type"));
}

#[test]
fn test_config_deserialization() {
    let json = r#"{
        "name": "edge",
        "max_body": "8MB",
        "compress": "yes",
        "timeout": "30"
    }"#;

    let config: ServerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.name, "edge");
    assert_eq!(config.max_body, 8 * 1024 * 1024);
    assert!(config.compress);
    assert_eq!(config.timeout, Value::Integer(30));
}

#[test]
fn test_value_serializes_to_json() {
    let values = vec![
        Value::Integer(3),
        Value::Float(0.5),
        Value::Boolean(true),
        Value::String("x".to_string()),
    ];
    assert_eq!(serde_json::to_string(&values).unwrap(), r#"[3,0.5,true,"x"]"#);
}

#[test]
fn test_custom_byte_string_format() {
    let format: NumberFormat = "%.2f".parse().unwrap();
    let options = ByteStringOptions::new().with_format(format);

    assert_eq!(to_byte_string_with_options(1536, &options).unwrap(), "1.50KB");
    assert_eq!(to_byte_string_with_options(0, &options).unwrap(), "0.00B");

    assert!(ByteStringOptions::new().with_format_str("%d").is_err());
}
