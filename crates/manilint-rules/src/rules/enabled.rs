//! Conditional enablement: `enabled.when` must resolve against its target.
//!
//! Targets are looked up by key with last-write-wins on duplicates. A
//! `contain` condition needs a csv target (and a member of its `csv_valid`
//! when one is declared); an `equal` condition needs a bool target.

use std::collections::HashMap;

use manilint_core::{Item, ItemType};

use crate::engine::{Rule, RuleContext};
use crate::violation::{type_label, Violation};

/// `enabled.when` references an existing, compatible item.
pub struct EnabledRule;

/// Key → item map where later declarations shadow earlier ones.
pub(crate) fn index_by_key(items: &[Item]) -> HashMap<&str, &Item> {
    items.iter().map(|i| (i.key.as_str(), i)).collect()
}

impl Rule for EnabledRule {
    fn name(&self) -> &'static str {
        "enabled"
    }

    fn progress(&self) -> &'static str {
        "check enabled lint..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        let by_key = index_by_key(cx.items);

        for item in cx.items {
            let Some(cond) = item.condition() else {
                continue;
            };
            let Some(target) = by_key.get(cond.target.as_str()) else {
                out.push(Violation::MissingTarget {
                    key: item.key.clone(),
                    target: cond.target.clone(),
                });
                continue;
            };
            if cond.contain.is_some() && cond.equal.is_some() {
                out.push(Violation::MultiCondition {
                    key: item.key.clone(),
                });
                continue;
            }

            if let Some(contain) = &cond.contain {
                if !target.is_type(ItemType::Csv) {
                    out.push(Violation::TargetTypeMismatch {
                        key: item.key.clone(),
                        target: cond.target.clone(),
                        expected: ItemType::Csv,
                        found: type_label(target),
                    });
                } else if !target.csv_valid.is_empty() && !target.csv_valid.contains(contain) {
                    out.push(Violation::ContainNotAllowed {
                        key: item.key.clone(),
                        target: cond.target.clone(),
                        value: contain.clone(),
                    });
                }
            }

            // Equality is only defined against boolean targets for now.
            if cond.equal.is_some() && !target.is_type(ItemType::Bool) {
                out.push(Violation::TargetTypeMismatch {
                    key: item.key.clone(),
                    target: cond.target.clone(),
                    expected: ItemType::Bool,
                    found: type_label(target),
                });
            }
        }
    }
}
