//! # Error Hierarchy
//!
//! Structured error types for manifest decoding and typed value conversion,
//! built with `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Decoding failures ([`ManifestError`]) abort before any rule runs. Value
//! conversion failures ([`ValueError`]) are not fatal on their own: the rule
//! engine wraps them into violations that name the offending item.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and decoding a manifest document.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file does not exist.
    #[error("manifest not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The document is not a well-formed sequence of items, or an item
    /// declares a type token outside the closed enumeration.
    #[error("failed to decode manifest {path}: {source}")]
    Decode {
        /// Path of the document, or `<inline>` for in-memory sources.
        path: PathBuf,
        /// Underlying YAML error, including line/column when available.
        source: serde_yaml::Error,
    },

    /// I/O error while reading the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type token that is not part of the closed item-type enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported type: {0}")]
pub struct UnsupportedType(pub String);

/// Failure to convert a raw manifest value into the grammar of an item type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The raw value has the wrong representation for the declared type.
    #[error("expected {expected}, found {found}")]
    Representation {
        /// Representation the type requires (e.g. "integer").
        expected: &'static str,
        /// Representation that was actually present.
        found: &'static str,
    },

    /// An integer does not fit the declared numeric type.
    #[error("integer {value} out of range for {item_type}")]
    OutOfRange {
        /// Textual form of the offending number.
        value: String,
        /// Token of the declared type.
        item_type: &'static str,
    },

    /// A csv sequence contains a nested sequence or mapping.
    #[error("csv element {index} is not a scalar")]
    NonScalarElement {
        /// Zero-based position of the element.
        index: usize,
    },

    /// A `host:port` string failed to split or its port is not a `u16`.
    #[error("invalid network address \"{input}\": {source}")]
    NetworkAddress {
        /// The string that failed to parse.
        input: String,
        /// Why the address was rejected.
        source: AddressError,
    },

    /// A byte quantity string failed to parse.
    #[error("invalid byte size \"{input}\": {reason}")]
    ByteSize {
        /// The string that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A duration string failed to parse.
    #[error("invalid duration \"{input}\": {reason}")]
    Duration {
        /// The string that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The declared type does not carry bounds.
    #[error("bounds are not supported for type {0}")]
    NotBounded(&'static str),
}

/// Reasons a `host:port` string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// No `:` separating host and port.
    #[error("missing port in address")]
    MissingPort,

    /// An unbracketed host contains a colon.
    #[error("too many colons in address")]
    TooManyColons,

    /// A `[` was opened but never closed.
    #[error("missing ']' in address")]
    MissingBracket,

    /// A bracket appears where none is allowed.
    #[error("unexpected '{0}' in address")]
    UnexpectedBracket(char),

    /// The port component is not a decimal number in `0..=65535`.
    #[error("invalid port \"{port}\": {reason}")]
    InvalidPort {
        /// The port component as written.
        port: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}
