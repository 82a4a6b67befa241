//! Duplicate keys.
//!
//! Cross-item lookups resolve duplicates last-write-wins. By default that is
//! only logged; `deny_duplicate_keys` turns each repeat into a violation.

use std::collections::HashMap;

use crate::engine::{Rule, RuleContext};
use crate::violation::Violation;

/// Keys should be declared once.
pub struct UniqueKeysRule;

impl Rule for UniqueKeysRule {
    fn name(&self) -> &'static str {
        "unique-keys"
    }

    fn progress(&self) -> &'static str {
        "check duplicate keys..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (index, item) in cx.items.iter().enumerate() {
            if item.key.is_empty() {
                continue;
            }
            let position = index + 1;
            let Some(&first) = first_seen.get(item.key.as_str()) else {
                first_seen.insert(item.key.as_str(), position);
                continue;
            };
            if cx.config.deny_duplicate_keys {
                out.push(Violation::DuplicateKey {
                    key: item.key.clone(),
                    first,
                    second: position,
                });
            } else {
                tracing::warn!(
                    key = %item.key,
                    first,
                    second = position,
                    "duplicate key; later declaration shadows earlier ones"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::rules::fixtures::{item, run, run_with};
    use manilint_core::ItemType;

    #[test]
    fn duplicates_tolerated_by_default() {
        let items = [item("a", ItemType::Int), item("a", ItemType::Bool)];
        assert!(run(&UniqueKeysRule, &items).is_empty());
    }

    #[test]
    fn duplicates_denied_when_configured() {
        let items = [
            item("a", ItemType::Int),
            item("b", ItemType::Int),
            item("a", ItemType::Bool),
            item("a", ItemType::Csv),
        ];
        let config = ValidatorConfig::default().deny_duplicate_keys();
        let out = run_with(&UniqueKeysRule, &items, &config);
        assert_eq!(
            out,
            vec![
                Violation::DuplicateKey {
                    key: "a".into(),
                    first: 1,
                    second: 3
                },
                Violation::DuplicateKey {
                    key: "a".into(),
                    first: 1,
                    second: 4
                },
            ]
        );
    }

    #[test]
    fn empty_keys_are_left_to_required_rule() {
        let items = [item("", ItemType::Int), item("", ItemType::Int)];
        let config = ValidatorConfig::default().deny_duplicate_keys();
        assert!(run_with(&UniqueKeysRule, &items, &config).is_empty());
    }
}
