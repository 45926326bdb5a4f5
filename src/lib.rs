//! # serde_dynjson
//!
//! A dynamic-value text codec with a JSON-like syntax and its own escape rules.
//!
//! ## What is it?
//!
//! The format looks like JSON: `{...}` objects, `[...]` arrays, quoted strings
//! and bare scalars. It differs in three places:
//!
//! - **Escapes**: control characters use C-style short forms (`\n`, `\t`,
//!   `\0`, `\a`, `\b`, `\f`, `\r`, `\v`) and there is no `\u` form. See
//!   [`escape`].
//! - **Numbers keep a width**: a decoded number is stored as the narrowest of
//!   `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `f32`, `f64` whose parser
//!   accepts it, in that order. A float that would overflow `f32` or round
//!   to zero in it stays `f64`. See [`Number::probe`].
//! - **Loose edges**: the top level must be an object, anything after its
//!   closing brace is ignored, and object keys are returned without
//!   unescaping.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_dynjson::{decode, encode, Object, Value};
//!
//! let mut object = Object::new();
//! object.insert("name".to_string(), Value::from("Ada"));
//! object.insert("langs".to_string(), Value::Array(vec![Value::from("en"), Value::from("fr")]));
//! object.insert("age".to_string(), Value::from(36u32));
//!
//! let text = encode(&object).unwrap();
//! assert_eq!(text, r#"{"name":"Ada","langs":["en","fr"],"age":36}"#);
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back["name"].as_str(), Some("Ada"));
//! // 36 fits in a u8, so that is the width it comes back with.
//! assert!(back["age"].equivalent(&object["age"]));
//! ```
//!
//! ### Serde types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_dynjson::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, r#"{"id":123,"name":"Alice","active":true}"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ### Capability values
//!
//! Types outside the value model implement [`Serializable`] and are embedded
//! with [`Value::serializable`]. The encoder converts them on the fly.
//!
//! ### Building values with `dynjson!`
//!
//! ```rust
//! use serde_dynjson::{dynjson, encode_value};
//!
//! let value = dynjson!({
//!     "name": "Alice",
//!     "tags": ["a", "b"],
//!     "score": null
//! });
//! assert_eq!(encode_value(&value).unwrap(), r#"{"name":"Alice","tags":["a","b"],"score":null}"#);
//! ```
//!
//! ## Diagnostics
//!
//! Encode and decode emit `tracing` events at `debug` (entry, exit, failure)
//! and `trace` (per probed scalar, per capability conversion). Install any
//! subscriber to see them; the demos use `tracing-subscriber` with `RUST_LOG`.
//!
//! ## Demos
//!
//! - **`dynamic_values.rs`** - building, encoding and inspecting values
//! - **`capability.rs`** - embedding external types through [`Serializable`]
//!
//! Run one with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{Decoder, ValueDeserializer};
pub use error::{Error, ParseErrorKind, Result};
pub use map::Object;
pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH};
pub use ser::{Encoder, ValueSerializer};
pub use value::{Number, Serializable, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encodes an object in compact form.
///
/// # Errors
///
/// Only when a nested [`Serializable`] fails to convert.
pub fn encode(object: &Object) -> Result<String> {
    encode_with_options(object, &EncodeOptions::default())
}

/// Encodes an object in pretty-printed form with the default indent.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::{encode_pretty, Object, Value};
///
/// let mut object = Object::new();
/// object.insert("a".to_string(), Value::from(1));
/// assert_eq!(encode_pretty(&object).unwrap(), "{\n  \"a\": 1\n}");
/// ```
///
/// # Errors
///
/// Only when a nested [`Serializable`] fails to convert.
pub fn encode_pretty(object: &Object) -> Result<String> {
    encode_with_options(object, &EncodeOptions::pretty())
}

/// Encodes an object with explicit options.
///
/// # Errors
///
/// Only when a nested [`Serializable`] fails to convert.
pub fn encode_with_options(object: &Object, options: &EncodeOptions) -> Result<String> {
    tracing::debug!(entries = object.len(), pretty = options.pretty, "encoding object");
    let mut encoder = Encoder::new(options.clone());
    encoder.encode_object(object).map_err(|err| {
        tracing::debug!(error = %err, "encode failed");
        err
    })?;
    Ok(encoder.into_inner())
}

/// Encodes any value, not only objects, in compact form.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::{encode_value, Value};
///
/// let value = Value::Array(vec![Value::from(1u8), Value::from("two"), Value::Null]);
/// assert_eq!(encode_value(&value).unwrap(), r#"[1,"two",null]"#);
/// ```
///
/// # Errors
///
/// Only when a nested [`Serializable`] fails to convert.
pub fn encode_value(value: &Value) -> Result<String> {
    encode_value_with_options(value, &EncodeOptions::default())
}

/// Encodes any value with explicit options.
///
/// # Errors
///
/// Only when a nested [`Serializable`] fails to convert.
pub fn encode_value_with_options(value: &Value, options: &EncodeOptions) -> Result<String> {
    tracing::debug!(kind = value.type_name(), pretty = options.pretty, "encoding value");
    let mut encoder = Encoder::new(options.clone());
    encoder.encode_value(value).map_err(|err| {
        tracing::debug!(error = %err, "encode failed");
        err
    })?;
    Ok(encoder.into_inner())
}

/// Encodes a capability value as the object it converts to.
///
/// # Errors
///
/// Returns whatever [`Serializable::to_object`] returns.
pub fn encode_serializable(value: &dyn Serializable) -> Result<String> {
    let object = value.to_object()?;
    encode(&object)
}

/// Decodes text into an object.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::decode;
///
/// let object = decode(r#"{"a":1,"a":2}"#).unwrap();
/// assert_eq!(object.len(), 1);
/// assert_eq!(object["a"].as_i64(), Some(2));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] carrying the [`ParseErrorKind`] and the character
/// offset of the problem.
pub fn decode(text: &str) -> Result<Object> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes text with explicit limits.
///
/// # Errors
///
/// As [`decode`], plus [`ParseErrorKind::DepthLimitExceeded`].
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Object> {
    Decoder::new(text, options).decode_object()
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Integer and float widths are kept, so `to_value(&7u16)` is a `U16`.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::{to_value, Number, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_object().unwrap()["x"], Value::Number(Number::I32(1)));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented, e.g. a map with
/// non-scalar keys.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Convert a [`Value`] into any `T: DeserializeOwned`.
///
/// # Errors
///
/// Returns an error if the value's shape or ranges do not fit `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to compact text.
///
/// Only values that serialize to an object can be read back with
/// [`from_str`], since the decoder requires an object at the top level.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_value(&to_value(value)?)
}

/// Serialize any `T: Serialize` to pretty-printed text.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_value_with_options(&to_value(value)?, &EncodeOptions::pretty())
}

/// Serialize any `T: Serialize` to a writer in compact form.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, br#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from text.
///
/// The text must hold an object at the top level.
///
/// # Errors
///
/// Returns a parse error for malformed text, or a conversion error if the
/// decoded object does not fit `T`.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(Value::Object(decode(s)?))
}

/// Deserialize an instance of type `T` from UTF-8 bytes.
///
/// # Errors
///
/// As [`from_str`], plus invalid UTF-8.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(br#"{"x":1,"y":2}"#)).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or as [`from_str`].
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[derive(Debug)]
    struct Temperature(f64);

    impl Serializable for Temperature {
        fn to_object(&self) -> Result<Object> {
            let mut object = Object::new();
            object.insert("celsius".to_string(), Value::from(self.0));
            Ok(object)
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let text = to_string(&user()).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user(), user_back);
    }

    #[test]
    fn test_pretty_printing() {
        let text = to_string_pretty(&user()).unwrap();
        assert!(text.contains("\n  \"tags\": [\n    \"admin\","));
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user(), user_back);
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("x"), Some(&Value::Number(Number::I32(1))));
        assert_eq!(object.get("y"), Some(&Value::Number(Number::I32(2))));
    }

    #[test]
    fn test_from_str_requires_object() {
        let text = to_string(&vec![1, 2, 3]).unwrap();
        assert_eq!(text, "[1,2,3]");
        assert!(from_str::<Vec<i32>>(&text).is_err());
    }

    #[test]
    fn test_from_slice_invalid_utf8() {
        let err = from_slice::<Point>(&[b'{', 0xff, b'}']).unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
    }

    #[test]
    fn test_encode_serializable_matches_literal() {
        let temperature = Temperature(21.5);
        let direct = encode_serializable(&temperature).unwrap();
        let literal = encode(&temperature.to_object().unwrap()).unwrap();
        assert_eq!(direct, literal);
        assert_eq!(direct, r#"{"celsius":21.5}"#);
    }

    #[test]
    fn test_nested_serializable() {
        let mut object = Object::new();
        object.insert("room".to_string(), Value::from("lab"));
        object.insert("reading".to_string(), Value::serializable(Temperature(-3.0)));
        assert_eq!(
            encode(&object).unwrap(),
            r#"{"room":"lab","reading":{"celsius":-3}}"#
        );
    }

    #[test]
    fn test_display_is_compact_encoding() {
        let value = Value::Array(vec![Value::from("a\tb"), Value::Bool(false)]);
        assert_eq!(value.to_string(), r#"["a\tb",false]"#);
    }
}
