//! Configuration for encoding and decoding.
//!
//! - [`EncodeOptions`]: compact (default) or pretty-printed output
//! - [`DecodeOptions`]: limits applied while parsing
//!
//! ## Examples
//!
//! ```rust
//! use serde_dynjson::{decode_with_options, encode_with_options, DecodeOptions, EncodeOptions, Object, Value};
//!
//! let mut object = Object::new();
//! object.insert("tags".to_string(), Value::Array(vec![Value::from("a"), Value::from("b")]));
//!
//! let text = encode_with_options(&object, &EncodeOptions::pretty().with_indent(4)).unwrap();
//! assert_eq!(text, "{\n    \"tags\": [\n        \"a\",\n        \"b\"\n    ]\n}");
//!
//! let back = decode_with_options(&text, &DecodeOptions::new().with_max_depth(8)).unwrap();
//! assert_eq!(back, object);
//! ```

/// Default nesting limit for [`DecodeOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Output formatting for the encoder.
///
/// Compact output has no whitespace at all. Pretty output breaks after every
/// `{`, `[` and `,`, indents each level by `indent` spaces, and puts a space
/// after `:`. Both decode to the same value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (compact output, 2-space indent when pretty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::EncodeOptions;
    ///
    /// let options = EncodeOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Limits for the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of objects and arrays, counting the root object as 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::DecodeOptions;
    ///
    /// assert_eq!(DecodeOptions::new().max_depth, 128);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
