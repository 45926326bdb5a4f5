//! Error types for encoding and decoding.
//!
//! Decoding failures are reported as [`Error::Parse`], which records what went
//! wrong ([`ParseErrorKind`]) and where: the character offset into the source
//! text plus the 1-based line and column. A decode either returns a complete
//! [`Object`](crate::Object) or an error; there is no partial result.
//!
//! Encoding is total for ordinary values. The only encode-time error source is
//! a [`Serializable`](crate::Serializable) implementation whose conversion
//! hook fails, which surfaces as [`Error::Conversion`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_dynjson::{decode, ParseErrorKind};
//!
//! let err = decode("{\"a\":}").unwrap_err();
//! assert_eq!(err.kind(), Some(ParseErrorKind::UnrecognizedScalar));
//! assert_eq!(err.offset(), Some(5));
//! ```

use std::fmt;
use thiserror::Error;

/// The condition that made a decode fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A required structural character (`{`, `:`, `,`, `}`, `]`) is missing,
    /// or the text ended while one was expected.
    MalformedStructure,
    /// A character appeared where the grammar does not allow it, including a
    /// raw control character inside an object key.
    UnexpectedCharacter,
    /// The text ended before a string's closing quote.
    UnterminatedString,
    /// A bare value token is neither a keyword nor any probed numeric type.
    UnrecognizedScalar,
    /// Objects and arrays are nested deeper than the decoder allows.
    DepthLimitExceeded,
}

impl ParseErrorKind {
    /// Short human readable label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::MalformedStructure => "malformed structure",
            ParseErrorKind::UnexpectedCharacter => "unexpected character",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::UnrecognizedScalar => "unrecognized scalar",
            ParseErrorKind::DepthLimitExceeded => "depth limit exceeded",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed input text.
    #[error("Parse error ({kind}) at offset {offset}, line {line}, column {col}: {msg}")]
    Parse {
        kind: ParseErrorKind,
        offset: usize,
        line: usize,
        col: usize,
        msg: String,
    },

    /// A serializable value failed to convert itself into an object.
    #[error("Conversion failed: {0}")]
    Conversion(String),

    /// Type mismatch while extracting or deserializing a value
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A serde shape the value model cannot hold, such as a non-scalar map key.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::{Error, ParseErrorKind};
    ///
    /// let err = Error::parse(ParseErrorKind::MalformedStructure, 7, 1, 8, "expected ':'");
    /// assert!(err.to_string().contains("offset 7"));
    /// ```
    pub fn parse(kind: ParseErrorKind, offset: usize, line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            kind,
            offset,
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a conversion error for a failing capability hook.
    pub fn conversion<T: fmt::Display>(msg: T) -> Self {
        Error::Conversion(msg.to_string())
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dynjson::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for decode failures.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// The parse failure kind, if this is a parse error.
    #[must_use]
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The character offset of the failure, if this is a parse error.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
