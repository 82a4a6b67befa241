//! `allow_relative` is a path-only switch.

use manilint_core::ItemType;

use crate::engine::{Rule, RuleContext};
use crate::violation::{type_label, Violation};

/// `allow_relative: true` requires a path item.
pub struct AllowRelativeRule;

impl Rule for AllowRelativeRule {
    fn name(&self) -> &'static str {
        "allow-relative"
    }

    fn progress(&self) -> &'static str {
        "check allow_relative limit..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            if item.allow_relative_path && !item.is_type(ItemType::Path) {
                out.push(Violation::UnsupportedField {
                    key: item.key.clone(),
                    field: "allow_relative",
                    item_type: type_label(item),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{item, run};

    #[test]
    fn path_may_allow_relative() {
        let mut it = item("data.dir", ItemType::Path);
        it.allow_relative_path = true;
        assert!(run(&AllowRelativeRule, &[it]).is_empty());
    }

    #[test]
    fn string_may_not_allow_relative() {
        let mut it = item("data.dir", ItemType::String);
        it.allow_relative_path = true;
        let out = run(&AllowRelativeRule, &[it]);
        assert_eq!(
            out[0].to_string(),
            "unsupported allow_relative for item data.dir: type string"
        );
    }
}
