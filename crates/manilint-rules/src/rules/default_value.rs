//! Default values must follow the grammar of the declared type.

use manilint_core::TypedValue;

use crate::engine::{Rule, RuleContext};
use crate::violation::{ValueSlot, Violation};

/// `default` converts into a [`TypedValue`] of the item's type.
pub struct DefaultValueRule;

impl Rule for DefaultValueRule {
    fn name(&self) -> &'static str {
        "default-value"
    }

    fn progress(&self) -> &'static str {
        "check default value types..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            let (Some(raw), Some(item_type)) = (&item.default, item.item_type) else {
                continue;
            };
            if let Err(source) = TypedValue::default_for(item_type, raw) {
                out.push(Violation::InvalidValue {
                    key: item.key.clone(),
                    slot: ValueSlot::Default,
                    source,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{item, run, yaml};
    use manilint_core::{Item, ItemType};

    fn with_default(key: &str, item_type: ItemType, default: &str) -> Item {
        let mut it = item(key, item_type);
        it.default = Some(yaml(default));
        it
    }

    #[test]
    fn absent_default_is_valid() {
        assert!(run(&DefaultValueRule, &[item("a", ItemType::Duration)]).is_empty());
    }

    #[test]
    fn matching_defaults_pass() {
        let items = [
            with_default("s", ItemType::String, "hello"),
            with_default("c", ItemType::Csv, "[a, b]"),
            with_default("i", ItemType::Int, "-1"),
            with_default("u", ItemType::Uint, "1"),
            with_default("f", ItemType::Float, "3"),
            with_default("b", ItemType::Bool, "false"),
            with_default("n", ItemType::NetworkAddress, "'0.0.0.0:8080'"),
            with_default("p", ItemType::Path, "./data"),
            with_default("z", ItemType::ByteSize, "10MB"),
            with_default("d", ItemType::Duration, "5s"),
        ];
        assert!(run(&DefaultValueRule, &items).is_empty());
    }

    #[test]
    fn signed_values_are_accepted_where_the_grammar_allows() {
        let items = [
            with_default("u", ItemType::Uint, "-1"),
            with_default("d", ItemType::Duration, "-5s"),
            with_default("h", ItemType::Duration, "1.5h"),
        ];
        assert!(run(&DefaultValueRule, &items).is_empty());
    }

    #[test]
    fn calendar_duration_units_are_rejected() {
        let out = run(
            &DefaultValueRule,
            &[with_default("ttl", ItemType::Duration, "5d")],
        );
        assert_eq!(
            out[0].to_string(),
            "invalid default value type on item ttl: invalid duration \"5d\": unknown unit \"d\""
        );
    }

    #[test]
    fn port_out_of_range_names_item_and_port() {
        let out = run(
            &DefaultValueRule,
            &[with_default("port", ItemType::NetworkAddress, "'host:99999'")],
        );
        assert_eq!(out.len(), 1);
        let msg = out[0].to_string();
        assert!(msg.starts_with("invalid default value type on item port"), "{msg}");
        assert!(msg.contains("invalid port \"99999\""), "{msg}");
    }

    #[test]
    fn byte_size_unit_must_exist() {
        let out = run(
            &DefaultValueRule,
            &[with_default("cache", ItemType::ByteSize, "10XB")],
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].to_string().contains("invalid byte size \"10XB\""));
    }

    #[test]
    fn representation_mismatch_is_reported() {
        let out = run(
            &DefaultValueRule,
            &[
                with_default("flag", ItemType::Bool, "'true'"),
                with_default("count", ItemType::Int, "2.5"),
            ],
        );
        assert_eq!(
            out.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            vec![
                "invalid default value type on item flag: expected boolean, found string",
                "invalid default value type on item count: expected integer, found float",
            ]
        );
    }

    #[test]
    fn untyped_items_are_left_to_required_rule() {
        let mut it = item("x", ItemType::Int);
        it.item_type = None;
        it.default = Some(yaml("whatever"));
        assert!(run(&DefaultValueRule, &[it]).is_empty());
    }
}
