//! Serde bridge from arbitrary `Serialize` values to [`OwnedScalar`].
//!
//! This is the dynamic entry point: the shape of the value is only known at
//! run time, so anything that is not a scalar fails with
//! [`Error::UnsupportedType`] naming the concrete Rust type.
//!
//! ```rust
//! use scalarconv::{autotype, to_scalar, ErrorKind, Value};
//!
//! let scalar = to_scalar(&Some(8u16)).unwrap();
//! assert_eq!(autotype(&scalar), Value::Integer(8));
//!
//! let err = to_scalar(&vec![1, 2]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedType);
//! ```

use crate::{Error, OwnedScalar, Result};
use serde::ser::{self, Impossible};
use serde::Serialize;

/// Converts any `T: Serialize` holding a single scalar into an [`OwnedScalar`].
///
/// `Some` and newtype wrappers are looked through.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for units, `None`, byte strings,
/// sequences, maps, structs and enum variants.
pub fn to_scalar<T>(value: &T) -> Result<OwnedScalar>
where
    T: ?Sized + Serialize,
{
    value.serialize(ScalarSerializer {
        type_name: std::any::type_name::<T>(),
    })
}

/// A serializer that accepts exactly one scalar.
pub struct ScalarSerializer {
    type_name: &'static str,
}

impl ScalarSerializer {
    fn unsupported(&self) -> Error {
        Error::unsupported_type(self.type_name)
    }
}

type Unsupported = Impossible<OwnedScalar, Error>;

impl ser::Serializer for ScalarSerializer {
    type Ok = OwnedScalar;
    type Error = Error;

    type SerializeSeq = Unsupported;
    type SerializeTuple = Unsupported;
    type SerializeTupleStruct = Unsupported;
    type SerializeTupleVariant = Unsupported;
    type SerializeMap = Unsupported;
    type SerializeStruct = Unsupported;
    type SerializeStructVariant = Unsupported;

    fn serialize_bool(self, v: bool) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<OwnedScalar> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<OwnedScalar> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<OwnedScalar> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Signed(v))
    }

    fn serialize_u8(self, v: u8) -> Result<OwnedScalar> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<OwnedScalar> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<OwnedScalar> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Unsigned(v))
    }

    fn serialize_f32(self, v: f32) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Float32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Float64(v))
    }

    fn serialize_char(self, v: char) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<OwnedScalar> {
        Ok(OwnedScalar::Text(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<OwnedScalar> {
        Err(self.unsupported())
    }

    fn serialize_none(self) -> Result<OwnedScalar> {
        Err(self.unsupported())
    }

    fn serialize_some<T>(self, value: &T) -> Result<OwnedScalar>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<OwnedScalar> {
        Err(self.unsupported())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<OwnedScalar> {
        Err(self.unsupported())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<OwnedScalar> {
        Err(self.unsupported())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<OwnedScalar>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<OwnedScalar>
    where
        T: ?Sized + Serialize,
    {
        Err(self.unsupported())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Unsupported> {
        Err(self.unsupported())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Unsupported> {
        Err(self.unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Port(u16);

    #[derive(Serialize)]
    struct Endpoint {
        host: String,
    }

    #[derive(Serialize)]
    enum Mode {
        Fast,
    }

    #[test]
    fn test_primitives() {
        assert_eq!(to_scalar(&-3i16).unwrap(), OwnedScalar::Signed(-3));
        assert_eq!(to_scalar(&3u8).unwrap(), OwnedScalar::Unsigned(3));
        assert_eq!(to_scalar(&1.5f32).unwrap(), OwnedScalar::Float32(1.5));
        assert_eq!(to_scalar(&true).unwrap(), OwnedScalar::Bool(true));
        assert_eq!(to_scalar(&'x').unwrap(), OwnedScalar::Text("x".to_string()));
        assert_eq!(to_scalar("abc").unwrap(), OwnedScalar::Text("abc".to_string()));
    }

    #[test]
    fn test_wrappers_are_transparent() {
        assert_eq!(to_scalar(&Some(5i32)).unwrap(), OwnedScalar::Signed(5));
        assert_eq!(to_scalar(&Port(8080)).unwrap(), OwnedScalar::Unsigned(8080));
    }

    #[test]
    fn test_unsupported_shapes_name_the_type() {
        let err = to_scalar(&vec![1u8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        assert!(err.to_string().contains("Vec<u8>"), "{err}");

        let none: Option<i32> = None;
        assert!(to_scalar(&none).is_err());
        assert!(to_scalar(&()).is_err());
        assert!(to_scalar(&Mode::Fast).is_err());
        assert!(to_scalar(&HashMap::<String, i32>::new()).is_err());

        let err = to_scalar(&Endpoint {
            host: "h".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Endpoint"), "{err}");
    }
}
