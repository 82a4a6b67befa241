//! `min` / `max`: only ordered types carry bounds, and each bound follows
//! the type's grammar.

use manilint_core::TypedValue;

use crate::engine::{Rule, RuleContext};
use crate::violation::{type_label, ValueSlot, Violation};

/// Bounds are declared only on ordered types and parse as that type.
pub struct MinMaxRule;

impl Rule for MinMaxRule {
    fn name(&self) -> &'static str {
        "min-max"
    }

    fn progress(&self) -> &'static str {
        "check min/max value types..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            let Some(item_type) = item.item_type else {
                continue;
            };
            for (slot, raw) in [(ValueSlot::Min, &item.min), (ValueSlot::Max, &item.max)] {
                let Some(raw) = raw else {
                    continue;
                };
                if !item_type.supports_bounds() {
                    out.push(Violation::UnsupportedField {
                        key: item.key.clone(),
                        field: slot.as_str(),
                        item_type: type_label(item),
                    });
                    continue;
                }
                if let Err(source) = TypedValue::bound_for(item_type, raw) {
                    out.push(Violation::InvalidValue {
                        key: item.key.clone(),
                        slot,
                        source,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{item, run, yaml};
    use manilint_core::{Item, ItemType};

    fn bounded(item_type: ItemType, min: Option<&str>, max: Option<&str>) -> Item {
        let mut it = item("limit", item_type);
        it.min = min.map(yaml);
        it.max = max.map(yaml);
        it
    }

    #[test]
    fn well_typed_bounds_pass() {
        let items = [
            bounded(ItemType::Int, Some("-5"), Some("5")),
            bounded(ItemType::Uint, None, Some("10")),
            bounded(ItemType::Float, Some("0"), Some("0.5")),
            bounded(ItemType::ByteSize, Some("1KB"), Some("1GiB")),
            bounded(ItemType::Duration, Some("100ms"), None),
        ];
        assert!(run(&MinMaxRule, &items).is_empty());
    }

    #[test]
    fn negative_uint_bounds_pass_type_check() {
        let out = run(&MinMaxRule, &[bounded(ItemType::Uint, Some("-5"), Some("10"))]);
        assert!(out.is_empty());
    }

    #[test]
    fn month_is_not_a_duration_unit() {
        let out = run(&MinMaxRule, &[bounded(ItemType::Duration, Some("1M"), None)]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn each_bound_is_checked_independently() {
        let out = run(
            &MinMaxRule,
            &[bounded(ItemType::Int, Some("'low'"), Some("1.5"))],
        );
        assert_eq!(
            out.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            vec![
                "invalid min value type on item limit: expected integer, found string",
                "invalid max value type on item limit: expected integer, found float",
            ]
        );
    }

    #[test]
    fn unparseable_duration_bound_carries_parse_error() {
        let out = run(
            &MinMaxRule,
            &[bounded(ItemType::Duration, None, Some("soon"))],
        );
        assert_eq!(out.len(), 1);
        assert!(out[0]
            .to_string()
            .starts_with("invalid max value type on item limit: invalid duration \"soon\""));
    }

    #[test]
    fn bounds_on_unordered_type_are_misuse() {
        let out = run(&MinMaxRule, &[bounded(ItemType::String, Some("1"), None)]);
        assert_eq!(
            out[0].to_string(),
            "unsupported min for item limit: type string"
        );
    }
}
