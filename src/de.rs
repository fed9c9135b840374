//! `deserialize_with` helpers for configuration structs.
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct CacheConfig {
//!     #[serde(deserialize_with = "scalarconv::de::byte_size_u64")]
//!     max_size: u64,
//!     #[serde(deserialize_with = "scalarconv::de::boolean")]
//!     enabled: bool,
//! }
//!
//! let config: CacheConfig =
//!     serde_json::from_str(r#"{"max_size": "512MiB", "enabled": "on"}"#).unwrap();
//! assert_eq!(config.max_size, 512 * 1024 * 1024);
//! assert!(config.enabled);
//! ```

use crate::{autotype, convert_to_bool, to_bytes, Value};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Deserializes a byte count from a number or a size string such as `"4k"`.
pub fn byte_size<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ByteSizeVisitor)
}

/// Like [`byte_size`], rounded to a whole, non-negative `u64`.
pub fn byte_size_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let bytes = byte_size(deserializer)?;

    if !bytes.is_finite() || bytes < 0.0 || bytes > u64::MAX as f64 {
        return Err(de::Error::custom(format!(
            "byte size {} is out of range for u64",
            bytes
        )));
    }

    Ok(bytes.round() as u64)
}

/// Deserializes a boolean from a real boolean or a `yes`/`off`-style token.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(BooleanVisitor)
}

/// Deserializes any scalar and infers its type with [`autotype`].
pub fn autotyped<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AutotypeVisitor)
}

struct ByteSizeVisitor;

impl<'de> Visitor<'de> for ByteSizeVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a byte count or a size string such as \"4k\"")
    }

    fn visit_i64<E>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_f64<E>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_str<E>(self, value: &str) -> Result<f64, E>
    where
        E: de::Error,
    {
        to_bytes(value).map_err(E::custom)
    }
}

struct BooleanVisitor;

impl<'de> Visitor<'de> for BooleanVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or one of true/yes/on/false/no/off")
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        convert_to_bool(value).map_err(E::custom)
    }
}

struct AutotypeVisitor;

impl<'de> Visitor<'de> for AutotypeVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(autotype(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(autotype(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(autotype(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(autotype(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(autotype(value))
    }
}
