//! # Item Types
//!
//! The closed enumeration of value types a manifest item may declare. Every
//! rule in the engine dispatches on this tag, so adding a variant forces an
//! exhaustive `match` update everywhere it matters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UnsupportedType;

/// Declared type of a configuration item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// Free-form text.
    String,
    /// Comma-separated list of tokens; defaults are sequences.
    Csv,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating-point number; integer literals are accepted.
    Float,
    /// Boolean flag.
    Bool,
    /// `host:port` socket address.
    NetworkAddress,
    /// Filesystem path.
    Path,
    /// Human-readable byte quantity such as `10MB`.
    ByteSize,
    /// Human-readable time span such as `5s`.
    Duration,
}

impl ItemType {
    /// All variants, in declaration order.
    pub const ALL: [ItemType; 10] = [
        ItemType::String,
        ItemType::Csv,
        ItemType::Int,
        ItemType::Uint,
        ItemType::Float,
        ItemType::Bool,
        ItemType::NetworkAddress,
        ItemType::Path,
        ItemType::ByteSize,
        ItemType::Duration,
    ];

    /// Canonical wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::String => "string",
            ItemType::Csv => "csv",
            ItemType::Int => "int",
            ItemType::Uint => "uint",
            ItemType::Float => "float",
            ItemType::Bool => "bool",
            ItemType::NetworkAddress => "network-address",
            ItemType::Path => "path",
            ItemType::ByteSize => "byte-size",
            ItemType::Duration => "duration",
        }
    }

    /// Whether `min`/`max` may be declared for this type.
    pub fn supports_bounds(&self) -> bool {
        matches!(
            self,
            ItemType::Int
                | ItemType::Uint
                | ItemType::Float
                | ItemType::ByteSize
                | ItemType::Duration
        )
    }

    /// Whether a maximum length may be declared for this type.
    pub fn supports_length(&self) -> bool {
        matches!(self, ItemType::String | ItemType::Csv | ItemType::Path)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ItemType::String),
            "csv" => Ok(ItemType::Csv),
            "int" => Ok(ItemType::Int),
            "uint" => Ok(ItemType::Uint),
            "float" => Ok(ItemType::Float),
            "bool" => Ok(ItemType::Bool),
            "network-address" | "naddr" => Ok(ItemType::NetworkAddress),
            "path" => Ok(ItemType::Path),
            "byte-size" | "bytes" => Ok(ItemType::ByteSize),
            "duration" => Ok(ItemType::Duration),
            other => Err(UnsupportedType(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ItemType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Decode an optional type token, treating an empty string as absent so the
/// required-field rule can report it instead of the decoder.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<ItemType>, D::Error>
where
    D: Deserializer<'de>,
{
    let token: Option<String> = Option::deserialize(deserializer)?;
    match token.as_deref() {
        None | Some("") => Ok(None),
        Some(t) => t.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
