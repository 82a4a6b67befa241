//! # Violations
//!
//! Every rule failure is a [`Violation`]: a structured value naming the item
//! (by key, or by 1-based position when the key itself is missing), the rule
//! that was broken, and any underlying parse diagnostic. Violations are data
//! collected into a [`Report`](crate::Report), not errors that abort a call.

use std::fmt;

use manilint_core::{Item, ItemType, ValueError};
use serde::Serialize;
use thiserror::Error;

/// Identifies an item in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemRef {
    /// 1-based declaration position, used before a key is known.
    Position(usize),
    /// The item's key.
    Key(String),
}

impl ItemRef {
    /// Refer to `item` by key, falling back to its 1-based `position`.
    pub fn of(item: &Item, position: usize) -> Self {
        if item.key.is_empty() {
            ItemRef::Position(position)
        } else {
            ItemRef::Key(item.key.clone())
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Position(p) => write!(f, "{p}"),
            ItemRef::Key(k) => f.write_str(k),
        }
    }
}

/// Which typed value slot of an item a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSlot {
    /// `default`.
    Default,
    /// `min`.
    Min,
    /// `max`.
    Max,
}

impl ValueSlot {
    /// Wire name of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSlot::Default => "default",
            ValueSlot::Min => "min",
            ValueSlot::Max => "max",
        }
    }
}

impl fmt::Display for ValueSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad class of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationCategory {
    /// A required field is missing or a key repeats.
    Structural,
    /// A value does not follow the grammar or domain of its declared type.
    TypeMismatch,
    /// A constraint is set on a type that does not support it.
    Misuse,
    /// An `enabled.when` condition does not resolve against its target.
    CrossReference,
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViolationCategory::Structural => "structural",
            ViolationCategory::TypeMismatch => "type-mismatch",
            ViolationCategory::Misuse => "misuse",
            ViolationCategory::CrossReference => "cross-reference",
        })
    }
}

/// A single rule failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required field is empty or absent.
    #[error("missing {field} on item {item}")]
    MissingField {
        /// The offending item.
        item: ItemRef,
        /// Field name, with locale suffix when a locale is required.
        field: String,
    },

    /// The same key is declared more than once.
    #[error("duplicate key {key} on items {first} and {second}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// 1-based position of the first declaration.
        first: usize,
        /// 1-based position of the repeat.
        second: usize,
    },

    /// `default`, `min` or `max` does not follow the item type's grammar.
    #[error("invalid {slot} value type on item {key}: {source}")]
    InvalidValue {
        /// Item key.
        key: String,
        /// Which value was rejected.
        slot: ValueSlot,
        /// Underlying conversion error.
        source: ValueError,
    },

    /// A constraint field is set on a type that does not support it.
    #[error("unsupported {field} for item {key}: type {item_type}")]
    UnsupportedField {
        /// Item key.
        key: String,
        /// Wire name of the misused field.
        field: &'static str,
        /// Declared type token.
        item_type: String,
    },

    /// A csv default contains a token outside `csv_valid`.
    #[error("unsupported default value for item {key}: value {value}, valid [{}]", .allowed.join(", "))]
    ValueNotAllowed {
        /// Item key.
        key: String,
        /// The first offending token.
        value: String,
        /// The declared allowed set.
        allowed: Vec<String>,
    },

    /// `str_valid` does not compile as a regular expression.
    #[error("invalid str_valid setting on item {key}: {reason}")]
    InvalidPattern {
        /// Item key.
        key: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// `enabled.when.target` names a key that no item declares.
    #[error("missing target {target} in enabled.when on item {key}")]
    MissingTarget {
        /// Item key.
        key: String,
        /// The unresolved target key.
        target: String,
    },

    /// Both `contain` and `equal` are set.
    #[error("multi condition on item {key}")]
    MultiCondition {
        /// Item key.
        key: String,
    },

    /// The condition kind does not fit the target's type.
    #[error("target {target} is not {expected} type on item {key}: found {found}")]
    TargetTypeMismatch {
        /// Item key.
        key: String,
        /// Target key.
        target: String,
        /// Type the condition requires.
        expected: ItemType,
        /// Type the target declares.
        found: String,
    },

    /// `contain` names a token outside the target's `csv_valid`.
    #[error("contain value {value} is not in csv_valid from target {target} on item {key}")]
    ContainNotAllowed {
        /// Item key.
        key: String,
        /// Target key.
        target: String,
        /// The `contain` token.
        value: String,
    },

    /// `min` is greater than `max`.
    #[error("min {min} exceeds max {max} on item {key}")]
    InvertedBounds {
        /// Item key.
        key: String,
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },

    /// `default` lies outside `[min, max]`.
    #[error("default value {value} is outside {slot} {bound} on item {key}")]
    DefaultOutOfBounds {
        /// Item key.
        key: String,
        /// Rendered default.
        value: String,
        /// The bound that is crossed.
        slot: ValueSlot,
        /// Rendered bound.
        bound: String,
    },

    /// A textual default is longer than `len`.
    #[error("default value length {length} exceeds len {max_length} on item {key}")]
    DefaultTooLong {
        /// Item key.
        key: String,
        /// Character count of the default.
        length: usize,
        /// Declared maximum.
        max_length: u64,
    },

    /// A `uint` item declares a negative value.
    #[error("negative {slot} value {value} on uint item {key}")]
    NegativeUnsigned {
        /// Item key.
        key: String,
        /// Which slot holds the value.
        slot: ValueSlot,
        /// The declared value.
        value: i64,
    },

    /// `equal` against a boolean target is not itself a boolean.
    #[error("equal value on item {key} must be a boolean, found {found}")]
    ConditionValueType {
        /// Item key.
        key: String,
        /// Representation that was found.
        found: &'static str,
    },
}

impl Violation {
    /// Broad class of this violation.
    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::MissingField { .. } | Violation::DuplicateKey { .. } => {
                ViolationCategory::Structural
            }
            Violation::InvalidValue { .. }
            | Violation::ValueNotAllowed { .. }
            | Violation::InvalidPattern { .. }
            | Violation::InvertedBounds { .. }
            | Violation::DefaultOutOfBounds { .. }
            | Violation::DefaultTooLong { .. }
            | Violation::NegativeUnsigned { .. } => ViolationCategory::TypeMismatch,
            Violation::UnsupportedField { .. } => ViolationCategory::Misuse,
            Violation::MissingTarget { .. }
            | Violation::MultiCondition { .. }
            | Violation::TargetTypeMismatch { .. }
            | Violation::ContainNotAllowed { .. }
            | Violation::ConditionValueType { .. } => ViolationCategory::CrossReference,
        }
    }

    /// The item this violation is about.
    pub fn item(&self) -> ItemRef {
        match self {
            Violation::MissingField { item, .. } => item.clone(),
            Violation::DuplicateKey { key, .. }
            | Violation::InvalidValue { key, .. }
            | Violation::UnsupportedField { key, .. }
            | Violation::ValueNotAllowed { key, .. }
            | Violation::InvalidPattern { key, .. }
            | Violation::MissingTarget { key, .. }
            | Violation::MultiCondition { key }
            | Violation::TargetTypeMismatch { key, .. }
            | Violation::ContainNotAllowed { key, .. }
            | Violation::InvertedBounds { key, .. }
            | Violation::DefaultOutOfBounds { key, .. }
            | Violation::DefaultTooLong { key, .. }
            | Violation::NegativeUnsigned { key, .. }
            | Violation::ConditionValueType { key, .. } => ItemRef::Key(key.clone()),
        }
    }
}

/// Type token for diagnostics; `none` when the item omits its type.
pub(crate) fn type_label(item: &Item) -> String {
    match item.item_type {
        Some(t) => t.to_string(),
        None => "none".to_string(),
    }
}
