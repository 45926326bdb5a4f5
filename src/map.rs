//! Ordered object type.
//!
//! [`Object`] wraps an [`IndexMap`] so that entries encode in the order they
//! were inserted. Decoded objects keep the order the keys appear in the text.
//! Inserting an existing key replaces its value in place, which is how
//! duplicate keys in decoded text resolve to the last occurrence.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dynjson::{Object, Value};
//!
//! let mut object = Object::new();
//! object.insert("name".to_string(), Value::from("Alice"));
//! object.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(object.len(), 2);
//! assert_eq!(object["name"].as_str(), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

/// An insertion-ordered map of string keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object(IndexMap<String, Value>);

impl Object {
    /// Creates an empty `Object`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Object;
    ///
    /// let object = Object::new();
    /// assert!(object.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Object(IndexMap::new())
    }

    /// Creates an empty `Object` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Object(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// A replaced key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::{Object, Value};
    ///
    /// let mut object = Object::new();
    /// assert!(object.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(object.insert("key".to_string(), Value::from(43)).is_some());
    /// assert_eq!(object.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, shifting later entries down so the remaining order holds.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Index<&str> for Object {
    type Output = Value;

    /// Returns `Value::Null` for missing keys rather than panicking.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl From<HashMap<String, Value>> for Object {
    fn from(map: HashMap<String, Value>) -> Self {
        Object(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Object(map.into_iter().collect())
    }
}

impl From<Object> for HashMap<String, Value> {
    fn from(object: Object) -> Self {
        object.0.into_iter().collect()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Object(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Object {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
