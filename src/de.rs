//! Decoding.
//!
//! [`Decoder`] is a single-pass recursive descent parser over a `&str`. The
//! decoder owns the cursor; every sub-parser advances it and returns with the
//! cursor just past the token it consumed. There is no backtracking.
//!
//! ## Grammar
//!
//! - The top level must be an object. Leading whitespace (space, tab, `\r`,
//!   `\n`) is skipped and anything after the closing `}` is ignored.
//! - Keys are quoted strings and may not contain raw control characters.
//!   They are returned exactly as written, without unescaping.
//! - String values may contain raw control characters and are unescaped.
//! - `null`, `true` and `false` are matched case sensitively as prefixes.
//! - Any other value is a bare token running up to the next control
//!   character, `,`, `}` or `]`. Surrounding spaces are trimmed and the token
//!   is probed as a number, narrowest type first (see [`Number::probe`]).
//! - Duplicate keys resolve to the last value.
//!
//! ```rust
//! use serde_dynjson::{decode, Number, Value};
//!
//! let object = decode(r#"{"small":200,"neg":-200,"big":70000,"pi":3.14}"#).unwrap();
//! assert_eq!(object["small"], Value::Number(Number::U8(200)));
//! assert_eq!(object["neg"], Value::Number(Number::I16(-200)));
//! assert_eq!(object["big"], Value::Number(Number::I32(70000)));
//! assert!(object["pi"].as_number().unwrap().is_float());
//! ```
//!
//! The module also provides [`ValueDeserializer`], which drives serde
//! `Deserialize` impls from a decoded [`Value`].

use crate::error::ParseErrorKind;
use crate::escape::{is_special_char, unescape};
use crate::value::widen_f32;
use crate::{DecodeOptions, Error, Number, Object, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// A saved cursor position, used to report errors at the start of a token.
#[derive(Clone, Copy, Debug)]
struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

/// The text decoder.
///
/// Created with [`Decoder::new`], consumed by [`Decoder::decode_object`].
pub struct Decoder<'a> {
    input: &'a str,
    position: usize, // byte index into `input`
    offset: usize,   // characters consumed so far
    line: usize,
    column: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder positioned at the start of `input`.
    pub fn new(input: &'a str, options: &DecodeOptions) -> Self {
        Decoder {
            input,
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses the top-level object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed input. Nothing partial is
    /// returned.
    pub fn decode_object(&mut self) -> Result<Object> {
        tracing::debug!(bytes = self.input.len(), "decoding object");

        let result = self.parse_root();
        match &result {
            Ok(object) => {
                tracing::debug!(entries = object.len(), consumed = self.offset, "decoded object")
            }
            Err(err) => tracing::debug!(error = %err, "decode failed"),
        }
        result
    }

    fn parse_root(&mut self) -> Result<Object> {
        self.skip_whitespace();
        match self.peek_char() {
            Some('{') => self.parse_object(),
            Some(ch) => Err(self.error(
                ParseErrorKind::MalformedStructure,
                &format!("expected '{{' at top level, found {:?}", ch),
            )),
            None => Err(self.error(
                ParseErrorKind::MalformedStructure,
                "expected '{' at top level, found end of input",
            )),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Only the four ASCII whitespace characters count.
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek_char() {
            self.next_char();
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn error(&self, kind: ParseErrorKind, msg: &str) -> Error {
        Self::error_at(self.mark(), kind, msg)
    }

    fn error_at(mark: Mark, kind: ParseErrorKind, msg: &str) -> Error {
        Error::parse(kind, mark.offset, mark.line, mark.column, msg)
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.next_char();
                Ok(())
            }
            Some(ch) => Err(self.error(
                ParseErrorKind::MalformedStructure,
                &format!("expected '{}', found {:?}", expected, ch),
            )),
            None => Err(self.error(
                ParseErrorKind::MalformedStructure,
                &format!("expected '{}', found end of input", expected),
            )),
        }
    }

    fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(
                ParseErrorKind::DepthLimitExceeded,
                &format!("nesting deeper than {} levels", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Object> {
        self.enter_nested()?;
        self.expect_char('{')?;

        let mut object = Object::new();
        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.depth -= 1;
            return Ok(object);
        }

        loop {
            self.skip_whitespace();
            let key = self.parse_key()?;
            self.skip_whitespace();
            self.expect_char(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            object.insert(key, value);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some(ch) => {
                    return Err(self.error(
                        ParseErrorKind::MalformedStructure,
                        &format!("expected ',' or '}}' in object, found {:?}", ch),
                    ));
                }
                None => {
                    return Err(self.error(
                        ParseErrorKind::MalformedStructure,
                        "expected ',' or '}' in object, found end of input",
                    ));
                }
            }
        }

        self.depth -= 1;
        Ok(object)
    }

    fn parse_array(&mut self) -> Result<Vec<Value>> {
        self.enter_nested()?;
        self.expect_char('[')?;

        let mut elements = Vec::new();
        self.skip_whitespace();
        if self.peek_char() == Some(']') {
            self.next_char();
            self.depth -= 1;
            return Ok(elements);
        }

        loop {
            self.skip_whitespace();
            elements.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(ch) => {
                    return Err(self.error(
                        ParseErrorKind::MalformedStructure,
                        &format!("expected ',' or ']' in array, found {:?}", ch),
                    ));
                }
                None => {
                    return Err(self.error(
                        ParseErrorKind::MalformedStructure,
                        "expected ',' or ']' in array, found end of input",
                    ));
                }
            }
        }

        self.depth -= 1;
        Ok(elements)
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek_char() {
            Some('"') => Ok(self.parse_string(false)?.to_string()),
            Some(ch) => Err(self.error(
                ParseErrorKind::UnexpectedCharacter,
                &format!("expected '\"' to start a key, found {:?}", ch),
            )),
            None => Err(self.error(
                ParseErrorKind::MalformedStructure,
                "expected a key, found end of input",
            )),
        }
    }

    /// Scans a quoted string and returns its raw, still escaped, content.
    ///
    /// A backslash always takes the next character with it, so `\"` never
    /// closes the string.
    fn parse_string(&mut self, allow_special_chars: bool) -> Result<&'a str> {
        let input = self.input;
        let opening = self.mark();
        self.expect_char('"')?;
        let start = self.position;

        loop {
            let before = self.position;
            match self.peek_char() {
                Some('"') => {
                    self.next_char();
                    return Ok(&input[start..before]);
                }
                Some('\\') => {
                    self.next_char();
                    if self.next_char().is_none() {
                        break;
                    }
                }
                Some(ch) if !allow_special_chars && is_special_char(ch) => {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedCharacter,
                        &format!("raw control character {:?} in key", ch),
                    ));
                }
                Some(_) => {
                    self.next_char();
                }
                None => break,
            }
        }

        Err(Self::error_at(
            opening,
            ParseErrorKind::UnterminatedString,
            "string is missing its closing quote",
        ))
    }

    /// Consumes `literal` if the remaining input starts with it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input[self.position..].starts_with(literal) {
            for _ in literal.chars() {
                self.next_char();
            }
            true
        } else {
            false
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek_char() {
            Some('"') => {
                let raw = self.parse_string(true)?;
                Ok(Value::String(unescape(raw)))
            }
            Some(_) if self.eat_literal("null") => Ok(Value::Null),
            Some(_) if self.eat_literal("true") => Ok(Value::Bool(true)),
            Some(_) if self.eat_literal("false") => Ok(Value::Bool(false)),
            Some('{') => Ok(Value::Object(self.parse_object()?)),
            Some('[') => Ok(Value::Array(self.parse_array()?)),
            Some(_) => self.parse_scalar(),
            None => Err(self.error(
                ParseErrorKind::MalformedStructure,
                "expected a value, found end of input",
            )),
        }
    }

    fn parse_scalar(&mut self) -> Result<Value> {
        let input = self.input;
        let mark = self.mark();
        let start = self.position;

        while let Some(ch) = self.peek_char() {
            if is_special_char(ch) || matches!(ch, ',' | '}' | ']') {
                break;
            }
            self.next_char();
        }

        let token = input[start..self.position].trim_matches(' ');
        match Number::probe(token) {
            Some(number) => {
                tracing::trace!(token, width = number.type_name(), "probed scalar");
                Ok(Value::Number(number))
            }
            None => Err(Self::error_at(
                mark,
                ParseErrorKind::UnrecognizedScalar,
                &format!("unrecognized scalar {:?}", token),
            )),
        }
    }
}

/// Serde deserializer reading from an owned [`Value`].
///
/// Numbers are visited at their stored width, so the target's primitive
/// visitor does the range check. `F32` is widened through its shortest
/// decimal text before being visited as `f64`.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => match n {
                Number::I8(v) => visitor.visit_i8(v),
                Number::I16(v) => visitor.visit_i16(v),
                Number::I32(v) => visitor.visit_i32(v),
                Number::I64(v) => visitor.visit_i64(v),
                Number::U8(v) => visitor.visit_u8(v),
                Number::U16(v) => visitor.visit_u16(v),
                Number::U32(v) => visitor.visit_u32(v),
                Number::U64(v) => visitor.visit_u64(v),
                Number::F32(v) => visitor.visit_f64(widen_f32(v)),
                Number::F64(v) => visitor.visit_f64(v),
            },
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            Value::Serializable(s) => visitor.visit_map(MapDeserializer::new(s.to_object()?)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                let mut entries = obj.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    _ => Err(Error::custom(
                        "expected an object with exactly one key for an enum variant",
                    )),
                }
            }
            other => Err(Error::type_mismatch(
                "string or single-key object for enum",
                other.type_name(),
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(object: Object) -> Self {
        MapDeserializer {
            iter: object.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::type_mismatch("null for unit variant", other.type_name())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(Error::type_mismatch("array for tuple variant", other.type_name())),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            other => Err(Error::type_mismatch("object for struct variant", other.type_name())),
        }
    }
}
