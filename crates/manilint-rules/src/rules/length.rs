//! `len` applies to string, csv and path items only.

use crate::engine::{Rule, RuleContext};
use crate::violation::{type_label, Violation};

/// A nonzero `len` needs a length-carrying type.
pub struct LengthRule;

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn progress(&self) -> &'static str {
        "check length limit..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            if item.max_length == 0 {
                continue;
            }
            if !item.item_type.is_some_and(|t| t.supports_length()) {
                out.push(Violation::UnsupportedField {
                    key: item.key.clone(),
                    field: "len",
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
    use manilint_core::ItemType;

    #[test]
    fn length_on_textual_types_passes() {
        let items: Vec<_> = [ItemType::String, ItemType::Csv, ItemType::Path]
            .into_iter()
            .map(|t| {
                let mut it = item("x", t);
                it.max_length = 64;
                it
            })
            .collect();
        assert!(run(&LengthRule, &items).is_empty());
    }

    #[test]
    fn length_on_duration_is_misuse() {
        let mut it = item("timeout", ItemType::Duration);
        it.max_length = 8;
        let out = run(&LengthRule, &[it]);
        assert_eq!(
            out[0].to_string(),
            "unsupported len for item timeout: type duration"
        );
    }

    #[test]
    fn zero_length_is_unset() {
        assert!(run(&LengthRule, &[item("n", ItemType::Int)]).is_empty());
    }
}
