//! `csv_valid`: only for csv items, and the default must stay inside it.

use manilint_core::value::scalar_text;
use manilint_core::ItemType;
use serde_yaml::Value;

use crate::engine::{Rule, RuleContext};
use crate::violation::{type_label, Violation};

/// `csv_valid` applies to csv items and bounds their default.
pub struct CsvRule;

impl Rule for CsvRule {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn progress(&self) -> &'static str {
        "check csv lint..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            if item.csv_valid.is_empty() {
                continue;
            }
            if !item.is_type(ItemType::Csv) {
                out.push(Violation::UnsupportedField {
                    key: item.key.clone(),
                    field: "csv_valid",
                    item_type: type_label(item),
                });
                continue;
            }
            // Non-sequence defaults are reported by the default-value rule.
            let Some(Value::Sequence(values)) = &item.default else {
                continue;
            };
            let outsider = values
                .iter()
                .filter_map(scalar_text)
                .find(|v| !item.csv_valid.contains(v));
            if let Some(value) = outsider {
                out.push(Violation::ValueNotAllowed {
                    key: item.key.clone(),
                    value,
                    allowed: item.csv_valid.clone(),
                });
            }
        }
    }
}
