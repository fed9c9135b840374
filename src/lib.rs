//! # scalarconv
//!
//! Coercion between loosely-typed scalar values: strings read from
//! configuration files, environment variables and command lines, and the
//! integers, floats, booleans and timestamps they stand for.
//!
//! ## Key Features
//!
//! - **Classification**: cheap predicates such as [`classify::is_integer`] and
//!   [`classify::is_boolean`] that never allocate
//! - **Byte Sizes**: `"4k"`, `"1.5GiB"` and `"10MB"` to byte counts and back,
//!   always with binary (1024) multipliers
//! - **Conversion**: any scalar to a [`TargetType`] through its canonical
//!   string form, with typed wrappers returning plain Rust types
//! - **Type Inference**: [`autotype`] picks the most specific type a string
//!   can hold
//! - **Serde Integration**: `deserialize_with` helpers in [`de`] and a bridge
//!   from any `Serialize` scalar in [`to_scalar`]
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! scalarconv = "0.1"
//! ```
//!
//! ### Byte Sizes
//!
//! ```rust
//! use scalarconv::{to_byte_string, to_bytes};
//!
//! assert_eq!(to_bytes("512MiB").unwrap(), 536870912.0);
//! assert_eq!(to_byte_string(536870912).unwrap(), "512MB");
//! ```
//!
//! ### Conversion
//!
//! ```rust
//! use scalarconv::{convert_to, convert_to_bool, convert_to_integer, TargetType, Value};
//!
//! assert_eq!(convert_to_integer("8080").unwrap(), 8080);
//! assert!(convert_to_bool("off").map(|b| !b).unwrap());
//! assert_eq!(convert_to(TargetType::String, 2.5f64).unwrap(), Value::String("2.5".into()));
//! assert!(convert_to_integer("eighty").is_err());
//! ```
//!
//! ### Type Inference
//!
//! ```rust
//! use scalarconv::{autotype, TargetType};
//!
//! let inferred: Vec<TargetType> = ["yes", "12", "1.5", "2024-03-14 09:30:00", "text"]
//!     .iter()
//!     .map(|s| autotype(*s).target_type())
//!     .collect();
//!
//! assert_eq!(
//!     inferred,
//!     [
//!         TargetType::Boolean,
//!         TargetType::Integer,
//!         TargetType::Float,
//!         TargetType::Time,
//!         TargetType::String,
//!     ]
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` and `trace` level only; it
//! never installs a subscriber.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API; every fallible operation returns [`Result`]

pub mod bytes;
pub mod classify;
pub mod convert;
pub mod de;
pub mod error;
pub mod format;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod time;
pub mod value;

pub use bytes::{parse_si_prefix, to_byte_string, to_byte_string_with_options, to_bytes, SiPrefix};
pub use convert::{
    autotype, convert_to, convert_to_bool, convert_to_float, convert_to_integer,
    convert_to_string, convert_to_time, to_string, AUTOTYPE_ORDER,
};
pub use error::{Error, ErrorKind, Result};
pub use format::{NumberFormat, Verb};
pub use options::ByteStringOptions;
pub use scalar::{OwnedScalar, Scalar};
pub use ser::{to_scalar, ScalarSerializer};
pub use time::{parse_time, zero_time, TimeLayout};
pub use value::{TargetType, Value};
