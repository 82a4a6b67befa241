//! # Manifest Items
//!
//! One [`Item`] per manifest entry. Items are decoded from YAML through a
//! private wire struct that accepts both the short snake_case keys
//! (`csv_valid`, `str_valid`, `len`, `allow_relative`, `enabled.when`) and
//! the descriptive aliases (`csvValid`, `stringPattern`, `maxLength`, ...).
//!
//! Empty strings in optional fields are folded to "unset" during decoding,
//! so rules only ever see `None` or a non-empty value.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::item_type::{self, ItemType};

/// Locale used when a name or description is written as a plain string.
pub const UNLOCALIZED: &str = "default";

/// Human-readable text keyed by locale (`zh`, `en`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Text for a single locale.
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(locale.into(), text.into());
        Self(map)
    }

    /// Non-empty text for `locale`, if any.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// True when at least one locale carries non-empty text.
    pub fn is_present(&self) -> bool {
        self.0.values().any(|s| !s.is_empty())
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Plain(String),
            Localized(BTreeMap<String, String>),
        }

        Ok(match Option::<Wire>::deserialize(deserializer)? {
            None => LocalizedText::default(),
            Some(Wire::Plain(s)) => LocalizedText::new(UNLOCALIZED, s),
            Some(Wire::Localized(map)) => LocalizedText(map),
        })
    }
}

/// Conditional-enablement rule: this item applies only when `target`
/// satisfies the condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    /// Key of the item the condition looks at.
    pub target: String,
    /// Target (a csv item) must contain this token.
    pub contain: Option<String>,
    /// Target must equal this value.
    pub equal: Option<Value>,
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            target: Option<String>,
            #[serde(default)]
            contain: Option<String>,
            #[serde(default)]
            equal: Option<Value>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Condition {
            target: wire.target.unwrap_or_default(),
            contain: wire.contain.filter(|s| !s.is_empty()),
            equal: wire.equal.filter(|v| !v.is_null()),
        })
    }
}

/// One configuration entry of a manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    /// Unique identifier and join key for cross-item lookups.
    pub key: String,
    /// Display name shown by form renderers.
    pub name: LocalizedText,
    /// Help text shown by form renderers.
    pub description: LocalizedText,
    /// Declared type; `None` when the manifest omits it.
    pub item_type: Option<ItemType>,
    /// Raw default value, interpreted according to `item_type`.
    pub default: Option<Value>,
    /// Allowed tokens for `csv` items.
    pub csv_valid: Vec<String>,
    /// Regular expression values must match.
    pub string_pattern: Option<String>,
    /// Raw lower bound.
    pub min: Option<Value>,
    /// Raw upper bound.
    pub max: Option<Value>,
    /// Maximum length; `0` means unset.
    pub max_length: u64,
    /// Whether a `path` item accepts relative paths.
    pub allow_relative_path: bool,
    /// Conditional enablement, when declared.
    pub enabled_when: Option<Condition>,
}

impl Item {
    /// The enablement condition if it names a target.
    pub fn condition(&self) -> Option<&Condition> {
        self.enabled_when.as_ref().filter(|c| !c.target.is_empty())
    }

    /// True when the item declares `type`.
    pub fn is_type(&self, item_type: ItemType) -> bool {
        self.item_type == Some(item_type)
    }

    /// Declared type token for diagnostics, empty when missing.
    pub fn type_token(&self) -> &'static str {
        self.item_type.map(|t| t.as_str()).unwrap_or("")
    }
}

#[derive(Deserialize)]
struct WireEnabled {
    #[serde(default)]
    when: Option<Condition>,
}

#[derive(Deserialize)]
struct WireItem {
    #[serde(default)]
    key: Option<String>,
    #[serde(default, alias = "displayName", alias = "display_name")]
    name: LocalizedText,
    #[serde(default, alias = "description")]
    desc: LocalizedText,
    #[serde(default, rename = "type", deserialize_with = "item_type::deserialize_optional")]
    item_type: Option<ItemType>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default, alias = "csvValid")]
    csv_valid: Option<Vec<String>>,
    #[serde(default, alias = "stringPattern", alias = "string_pattern")]
    str_valid: Option<String>,
    #[serde(default)]
    min: Option<Value>,
    #[serde(default)]
    max: Option<Value>,
    #[serde(default, alias = "maxLength", alias = "max_length")]
    len: Option<u64>,
    #[serde(default, alias = "allowRelativePath", alias = "allow_relative_path")]
    allow_relative: Option<bool>,
    #[serde(default)]
    enabled: Option<WireEnabled>,
    #[serde(default, alias = "enabledWhen")]
    enabled_when: Option<Condition>,
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireItem::deserialize(deserializer)?;
        let nested = wire.enabled.and_then(|e| e.when);
        Ok(Item {
            key: wire.key.unwrap_or_default(),
            name: wire.name,
            description: wire.desc,
            item_type: wire.item_type,
            default: wire.default.filter(|v| !v.is_null()),
            csv_valid: wire.csv_valid.unwrap_or_default(),
            string_pattern: wire.str_valid.filter(|s| !s.is_empty()),
            min: wire.min.filter(|v| !v.is_null()),
            max: wire.max.filter(|v| !v.is_null()),
            max_length: wire.len.unwrap_or(0),
            allow_relative_path: wire.allow_relative.unwrap_or(false),
            enabled_when: wire.enabled_when.or(nested),
        })
    }
}
