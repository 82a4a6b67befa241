#![deny(missing_docs)]

//! # manilint-core — Manifest Model for manilint
//!
//! Foundational types that the rule engine and the CLI depend on. It has no
//! internal crate dependencies.
//!
//! ## Design Principles
//!
//! 1. **Closed type enumeration.** [`ItemType`] lists every value type an item
//!    may declare. Unknown tokens are rejected while decoding.
//!
//! 2. **Typed values.** Raw YAML for `default`, `min` and `max` is converted
//!    into [`TypedValue`] by per-type constructors; rules never inspect raw
//!    representations themselves.
//!
//! 3. **All-or-nothing decoding.** [`Manifest::load`] either yields every item
//!    in declaration order or a [`ManifestError`].

pub mod address;
pub mod error;
pub mod item;
pub mod item_type;
pub mod manifest;
pub mod value;

pub use address::NetworkAddress;
pub use error::{AddressError, ManifestError, UnsupportedType, ValueError};
pub use item::{Condition, Item, LocalizedText};
pub use item_type::ItemType;
pub use manifest::Manifest;
pub use value::TypedValue;
