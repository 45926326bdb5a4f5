//! Encoding.
//!
//! [`Encoder`] walks a [`Value`] graph depth first and appends text to a single
//! output buffer. There is no lookahead and no second pass.
//!
//! ## Output grammar
//!
//! - object: `{"key":value,...}`, `{}` when empty, entries in insertion order
//! - array: `[value,...]`, `[]` when empty
//! - string: `"..."` with the [`escape`](crate::escape) table applied
//! - number: the `Display` text of the stored width
//! - `true`, `false`, `null`
//! - capability values: converted with [`Serializable::to_object`](crate::Serializable::to_object),
//!   then written as an object
//!
//! Keys go through the same escaping as string values.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use serde_dynjson::{encode, Object, Value};
//!
//! let mut object = Object::new();
//! object.insert("id".to_string(), Value::from(7u32));
//! object.insert("note".to_string(), Value::from("two\nlines"));
//! assert_eq!(encode(&object).unwrap(), r#"{"id":7,"note":"two\nlines"}"#);
//! ```
//!
//! The module also provides [`ValueSerializer`], the serde serializer behind
//! [`to_value`](crate::to_value).

use crate::escape::escape_into;
use crate::{EncodeOptions, Error, Number, Object, Result, Value};
use serde::{ser, Serialize};

/// Writes values into a text buffer.
pub struct Encoder {
    output: String,
    options: EncodeOptions,
    indent_level: usize,
}

impl Encoder {
    /// Creates an encoder with an empty output buffer.
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    /// Consumes the encoder and returns the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the encoding of `value`.
    ///
    /// # Errors
    ///
    /// Only a failing [`Serializable`](crate::Serializable) conversion.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_string(s),
            Value::Array(arr) => self.encode_array(arr)?,
            Value::Object(obj) => self.encode_object(obj)?,
            Value::Serializable(s) => {
                let object = s.to_object()?;
                tracing::trace!(entries = object.len(), "converted serializable value");
                self.encode_object(&object)?;
            }
        }
        Ok(())
    }

    /// Appends the encoding of `object`.
    pub fn encode_object(&mut self, object: &Object) -> Result<()> {
        if object.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }

        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in object.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.encode_value(value)?;
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
        Ok(())
    }

    fn encode_array(&mut self, elements: &[Value]) -> Result<()> {
        if elements.is_empty() {
            self.output.push_str("[]");
            return Ok(());
        }

        self.output.push('[');
        self.indent_level += 1;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.encode_value(element)?;
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
        Ok(())
    }

    /// Pretty mode only: newline plus indentation for the current level.
    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            for _ in 0..self.indent_level * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    #[inline]
    fn write_number(&mut self, n: &Number) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.output, "{}", n);
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        escape_into(&mut self.output, s);
        self.output.push('"');
    }
}

/// Serde serializer producing a [`Value`].
///
/// Every primitive keeps its width, `None` and `()` become `Null`, unit
/// variants become their name, and data-carrying variants become a
/// single-entry object keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Object,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: Object,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut object = Object::with_capacity(1);
        object.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(object))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: Object::new(),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: Object::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut object = Object::with_capacity(1);
        object.insert(self.variant.to_string(), Value::Array(self.vec));
        Ok(Value::Object(object))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Scalar keys are stringified the way they would print.
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::unsupported_type(&format!(
                    "{} as map key",
                    other.type_name()
                )));
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut object = Object::with_capacity(1);
        object.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(object))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
