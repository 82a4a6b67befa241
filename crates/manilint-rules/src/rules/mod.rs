//! The built-in rules, one module per check.
//!
//! Order matters only for fail-fast reporting: structural checks first,
//! then per-item value checks, then cross-item checks.

mod bounds;
mod consistency;
mod csv;
mod default_value;
mod enabled;
mod length;
mod pattern;
mod relative_path;
mod required;
mod unique;

pub use bounds::MinMaxRule;
pub use consistency::ConsistencyRule;
pub use csv::CsvRule;
pub use default_value::DefaultValueRule;
pub use enabled::EnabledRule;
pub use length::LengthRule;
pub use pattern::StringPatternRule;
pub use relative_path::AllowRelativeRule;
pub use required::RequiredRule;
pub use unique::UniqueKeysRule;

use crate::engine::Rule;

/// The standard pipeline in execution order.
pub fn pipeline() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredRule),
        Box::new(UniqueKeysRule),
        Box::new(DefaultValueRule),
        Box::new(CsvRule),
        Box::new(StringPatternRule),
        Box::new(MinMaxRule),
        Box::new(LengthRule),
        Box::new(AllowRelativeRule),
        Box::new(EnabledRule),
        Box::new(ConsistencyRule),
    ]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use manilint_core::{Item, ItemType, LocalizedText};

    use crate::config::ValidatorConfig;
    use crate::engine::{Rule, RuleContext};
    use crate::violation::Violation;

    /// A fully described item of the given type.
    pub fn item(key: &str, item_type: ItemType) -> Item {
        Item {
            key: key.into(),
            name: LocalizedText::new("zh", format!("{key} name")),
            description: LocalizedText::new("zh", format!("{key} desc")),
            item_type: Some(item_type),
            ..Item::default()
        }
    }

    pub fn yaml(s: &str) -> serde_yaml::Value {
        serde_yaml::from_str(s).unwrap()
    }

    pub fn run(rule: &dyn Rule, items: &[Item]) -> Vec<Violation> {
        run_with(rule, items, &ValidatorConfig::default())
    }

    pub fn run_with(rule: &dyn Rule, items: &[Item], config: &ValidatorConfig) -> Vec<Violation> {
        let cx = RuleContext { items, config };
        let mut out = Vec::new();
        rule.check(&cx, &mut out);
        out
    }
}
