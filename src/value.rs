//! Dynamic value representation.
//!
//! This module provides [`Value`], the single type that encoding and decoding
//! traffic in, along with [`Number`] and the [`Serializable`] capability.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, object, or a capability-backed value
//! - [`Number`]: a number that remembers its width (`u8` through `f64`)
//! - [`Serializable`]: implemented by external types that can turn themselves into an [`Object`]
//!
//! ## Numeric width on decode
//!
//! Text carries no type information, so a decoded number takes the first type
//! in this list whose native parser accepts the token:
//!
//! `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `f32`, `f64`
//!
//! ```rust
//! use serde_dynjson::Number;
//!
//! assert_eq!(Number::probe("200"), Some(Number::U8(200)));
//! assert_eq!(Number::probe("-200"), Some(Number::I16(-200)));
//! assert_eq!(Number::probe("70000"), Some(Number::I32(70000)));
//! assert_eq!(Number::probe("3.14"), Some(Number::F32(3.14)));
//! assert_eq!(Number::probe("3.14.15"), None);
//! ```
//!
//! A value written as one width can therefore come back as another. Use
//! [`Value::equivalent`] to compare values across that collapse.

use crate::{Object, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A type that can produce its own [`Object`] representation.
///
/// The encoder calls [`to_object`](Serializable::to_object) exactly once per
/// encounter and writes the result as if it were a literal nested object.
/// Populating such types from decoded data is left to the caller, for
/// example through [`from_value`](crate::from_value).
///
/// # Examples
///
/// ```rust
/// use serde_dynjson::{encode_serializable, Object, Result, Serializable, Value};
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// impl Serializable for Point {
///     fn to_object(&self) -> Result<Object> {
///         let mut object = Object::new();
///         object.insert("x".to_string(), Value::from(self.x));
///         object.insert("y".to_string(), Value::from(self.y));
///         Ok(object)
///     }
/// }
///
/// assert_eq!(encode_serializable(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
pub trait Serializable: fmt::Debug + Send + Sync {
    /// Converts `self` into an object.
    ///
    /// # Errors
    ///
    /// Whatever the implementation reports; the encoder passes it through.
    fn to_object(&self) -> Result<Object>;
}

/// A dynamically-typed value.
///
/// `PartialEq` is strict: numbers must have the same width and capability
/// values must be the same allocation. See [`Value::equivalent`] for the
/// looser comparison that round trips satisfy.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Serializable(Arc<dyn Serializable>),
}

/// A number tagged with its native width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! probe_as {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(token: &str) -> Option<Number> {
            token.parse::<$ty>().ok().map(Number::$variant)
        }
    };
}

probe_as!(probe_u8, u8, U8);
probe_as!(probe_i16, i16, I16);
probe_as!(probe_u16, u16, U16);
probe_as!(probe_i32, i32, I32);
probe_as!(probe_u32, u32, U32);
probe_as!(probe_i64, i64, I64);
probe_as!(probe_u64, u64, U64);
probe_as!(probe_f64, f64, F64);

/// Accepts a token as `f32` only when the result represents it: a finite
/// token that overflows to infinity or underflows to zero is left for `f64`.
fn probe_f32(token: &str) -> Option<Number> {
    let narrow = token.parse::<f32>().ok()?;
    if narrow.is_infinite() || narrow == 0.0 {
        if let Ok(wide) = token.parse::<f64>() {
            if wide.is_finite() && wide != 0.0 {
                return None;
            }
        }
    }
    Some(Number::F32(narrow))
}

/// Decode-time numeric probes, narrowest first. The order is part of the
/// format: changing it changes which width a token decodes to.
const PROBE_CASCADE: [fn(&str) -> Option<Number>; 9] = [
    probe_u8, probe_i16, probe_u16, probe_i32, probe_u32, probe_i64, probe_u64, probe_f32,
    probe_f64,
];

/// Widens an `f32` through its shortest decimal form, so `0.1f32` becomes
/// `0.1f64` rather than `0.10000000149011612`.
pub(crate) fn widen_f32(v: f32) -> f64 {
    if v.is_finite() {
        v.to_string().parse::<f64>().unwrap_or(v as f64)
    } else {
        v as f64
    }
}

// Exclusive upper bounds; `i64::MAX as f64` rounds up to 2^63.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl Number {
    /// Parses a bare token with the decode probe cascade.
    ///
    /// Returns the first width whose native parser accepts the whole token,
    /// or `None` if none does.
    #[must_use]
    pub fn probe(token: &str) -> Option<Number> {
        PROBE_CASCADE.iter().find_map(|probe| probe(token))
    }

    /// Name of the stored width, e.g. `"u8"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// The value as an `i128` if it is stored as an integer of any width.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::I8(n) => Some(n.into()),
            Number::I16(n) => Some(n.into()),
            Number::I32(n) => Some(n.into()),
            Number::I64(n) => Some(n.into()),
            Number::U8(n) => Some(n.into()),
            Number::U16(n) => Some(n.into()),
            Number::U32(n) => Some(n.into()),
            Number::U64(n) => Some(n.into()),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// Converts to `i64` when the value is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Number;
    ///
    /// assert_eq!(Number::U8(42).as_i64(), Some(42));
    /// assert_eq!(Number::F64(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::F64(42.5).as_i64(), None);
    /// assert_eq!(Number::U64(u64::MAX).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.as_i128() {
            Some(n) => i64::try_from(n).ok(),
            None => {
                let f = self.as_f64();
                if f.fract() == 0.0 && f >= -TWO_POW_63 && f < TWO_POW_63 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts to `u64` when the value is integral, non-negative and in range.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self.as_i128() {
            Some(n) => u64::try_from(n).ok(),
            None => {
                let f = self.as_f64();
                if f.fract() == 0.0 && f >= 0.0 && f < TWO_POW_64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts to `f64`. `f32` values widen through their shortest decimal form.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I8(n) => n.into(),
            Number::I16(n) => n.into(),
            Number::I32(n) => n.into(),
            Number::I64(n) => n as f64,
            Number::U8(n) => n.into(),
            Number::U16(n) => n.into(),
            Number::U32(n) => n.into(),
            Number::U64(n) => n as f64,
            Number::F32(n) => widen_f32(n),
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers ignoring width.
    ///
    /// Integers compare exactly. When either side is a float the comparison
    /// happens at the narrower precision involved, so `F64(3.14)` is
    /// equivalent to `F32(3.14)`. NaN is equivalent to NaN. A finite value
    /// never matches an infinite one, and a non-zero value never matches
    /// zero, even when narrowing would make them equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Number;
    ///
    /// assert!(Number::I64(200).equivalent(&Number::U8(200)));
    /// assert!(Number::F64(3.14).equivalent(&Number::F32(3.14)));
    /// assert!(!Number::I32(1).equivalent(&Number::I32(2)));
    /// assert!(!Number::F64(1e300).equivalent(&Number::F32(f32::INFINITY)));
    /// ```
    #[must_use]
    pub fn equivalent(&self, other: &Number) -> bool {
        if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
            return a == b;
        }

        if matches!(self, Number::F32(_)) || matches!(other, Number::F32(_)) {
            let (wide_a, wide_b) = (self.as_f64_lossy(), other.as_f64_lossy());
            if wide_a.is_finite() != wide_b.is_finite() || (wide_a == 0.0) != (wide_b == 0.0) {
                return false;
            }
            let a = self.as_f32_lossy();
            let b = other.as_f32_lossy();
            a == b || (a.is_nan() && b.is_nan())
        } else {
            float_eq(self.as_f64_lossy(), other.as_f64_lossy())
        }
    }

    fn as_f64_lossy(&self) -> f64 {
        match *self {
            Number::F32(n) => n as f64,
            Number::F64(n) => n,
            _ => self.as_i128().map_or(f64::NAN, |n| n as f64),
        }
    }

    fn as_f32_lossy(&self) -> f32 {
        match *self {
            Number::F32(n) => n,
            _ => self.as_f64_lossy() as f32,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{}", n),
            Number::I16(n) => write!(f, "{}", n),
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            Number::U8(n) => write!(f, "{}", n),
            Number::U16(n) => write!(f, "{}", n),
            Number::U32(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F32(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! impl_from_for_number {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Number {
            fn from(value: $type) -> Self {
                Number::$variant(value)
            }
        }

        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Value::Number(Number::$variant(value))
            }
        }
    };
}

impl_from_for_number!(i8, I8);
impl_from_for_number!(i16, I16);
impl_from_for_number!(i32, I32);
impl_from_for_number!(i64, I64);
impl_from_for_number!(u8, U8);
impl_from_for_number!(u16, U16);
impl_from_for_number!(u32, U32);
impl_from_for_number!(u64, U64);
impl_from_for_number!(f32, F32);
impl_from_for_number!(f64, F64);

impl Value {
    /// Wraps a capability implementation as a value.
    pub fn serializable<S: Serializable + 'static>(value: S) -> Self {
        Value::Serializable(Arc::new(value))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_serializable(&self) -> bool {
        matches!(self, Value::Serializable(_))
    }

    /// Name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) => n.type_name(),
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Serializable(_) => "serializable",
        }
    }

    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::{Number, Value};
    ///
    /// assert_eq!(Value::Number(Number::U8(42)).as_i64(), Some(42));
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Structural comparison that tolerates numeric width changes.
    ///
    /// This is the relation `decode(encode(v))` preserves: numbers compare with
    /// [`Number::equivalent`], objects compare by key, and capability values
    /// are converted before comparison (a failing conversion is never
    /// equivalent to anything).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Value;
    ///
    /// let written = Value::Array(vec![Value::from(7i64), Value::from(2.5f64)]);
    /// let read = Value::Array(vec![Value::from(7u8), Value::from(2.5f32)]);
    /// assert!(written.equivalent(&read));
    /// assert_ne!(written, read);
    /// ```
    #[must_use]
    pub fn equivalent(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Serializable(s), other) | (other, Value::Serializable(s)) => {
                match s.to_object() {
                    Ok(object) => Value::Object(object).equivalent(other),
                    Err(_) => false,
                }
            }
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.equivalent(b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.equivalent(y)))
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Serializable(a), Value::Serializable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Renders the compact encoding. Fails only if a capability conversion fails.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::encode_value(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
            Value::Serializable(s) => {
                use serde::ser::Error as _;
                let object = s.to_object().map_err(S::Error::custom)?;
                object.serialize(serializer)
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::I8(n) => serializer.serialize_i8(n),
            Number::I16(n) => serializer.serialize_i16(n),
            Number::I32(n) => serializer.serialize_i32(n),
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U8(n) => serializer.serialize_u8(n),
            Number::U16(n) => serializer.serialize_u16(n),
            Number::U32(n) => serializer.serialize_u32(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F32(n) => serializer.serialize_f32(n),
            Number::F64(n) => serializer.serialize_f64(n),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i8<E>(self, value: i8) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i16<E>(self, value: i16) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i32<E>(self, value: i32) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u8<E>(self, value: u8) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u16<E>(self, value: u16) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u32<E>(self, value: u32) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f32<E>(self, value: f32) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Object::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("i64", value.type_name()))
    }
}

impl TryFrom<Value> for u64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_u64()
            .ok_or_else(|| crate::Error::type_mismatch("u64", value.type_name()))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("number", value.type_name()))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
