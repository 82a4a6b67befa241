//! Strict-mode consistency between fields of the same item.
//!
//! `uint` values are typed as plain integers by the default-value and
//! min-max rules; their sign is checked here.
//!
//! Values that fail to parse are skipped here; the default-value and
//! min-max rules already report them.

use std::cmp::Ordering;

use manilint_core::value::representation;
use manilint_core::{Item, ItemType, TypedValue};
use serde_yaml::Value;

use crate::config::ValidatorConfig;
use crate::engine::{Rule, RuleContext};
use crate::rules::enabled::index_by_key;
use crate::violation::{ValueSlot, Violation};

/// Bounds are ordered, the default fits them, and `equal` values are typed.
pub struct ConsistencyRule;

impl Rule for ConsistencyRule {
    fn name(&self) -> &'static str {
        "consistency"
    }

    fn progress(&self) -> &'static str {
        "check value consistency..."
    }

    fn applies(&self, config: &ValidatorConfig) -> bool {
        config.strict
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        let by_key = index_by_key(cx.items);
        for item in cx.items {
            check_ranges(item, out);
            check_equal_value(item, &by_key, out);
        }
    }
}

fn check_ranges(item: &Item, out: &mut Vec<Violation>) {
    let Some(item_type) = item.item_type else {
        return;
    };
    let parse_bound = |raw: &Option<Value>| {
        raw.as_ref()
            .and_then(|r| TypedValue::bound_for(item_type, r).ok())
    };
    let min = parse_bound(&item.min);
    let max = parse_bound(&item.max);
    let default = item
        .default
        .as_ref()
        .and_then(|r| TypedValue::default_for(item_type, r).ok());

    for (slot, value) in [
        (ValueSlot::Default, &default),
        (ValueSlot::Min, &min),
        (ValueSlot::Max, &max),
    ] {
        if let Some(TypedValue::Uint(v)) = value {
            if *v < 0 {
                out.push(Violation::NegativeUnsigned {
                    key: item.key.clone(),
                    slot,
                    value: *v,
                });
            }
        }
    }

    if let (Some(lo), Some(hi)) = (&min, &max) {
        if lo.compare(hi) == Some(Ordering::Greater) {
            out.push(Violation::InvertedBounds {
                key: item.key.clone(),
                min: lo.render(),
                max: hi.render(),
            });
        }
    }

    let Some(default) = default else {
        return;
    };
    for (slot, bound, outside) in [
        (ValueSlot::Min, &min, Ordering::Less),
        (ValueSlot::Max, &max, Ordering::Greater),
    ] {
        let Some(bound) = bound else {
            continue;
        };
        if default.compare(bound) == Some(outside) {
            out.push(Violation::DefaultOutOfBounds {
                key: item.key.clone(),
                value: default.render(),
                slot,
                bound: bound.render(),
            });
        }
    }

    if item.max_length > 0 {
        if let Some(length) = default.text_len() {
            if length as u64 > item.max_length {
                out.push(Violation::DefaultTooLong {
                    key: item.key.clone(),
                    length,
                    max_length: item.max_length,
                });
            }
        }
    }
}

fn check_equal_value(
    item: &Item,
    by_key: &std::collections::HashMap<&str, &Item>,
    out: &mut Vec<Violation>,
) {
    let Some(cond) = item.condition() else {
        return;
    };
    let Some(equal) = &cond.equal else {
        return;
    };
    let target_is_bool = by_key
        .get(cond.target.as_str())
        .is_some_and(|t| t.is_type(ItemType::Bool));
    if target_is_bool && !matches!(equal, Value::Bool(_)) {
        out.push(Violation::ConditionValueType {
            key: item.key.clone(),
            found: representation(equal),
        });
    }
}
