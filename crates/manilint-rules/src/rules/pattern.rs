//! `str_valid` must compile. Whether it matches anything is not checked.

use regex::Regex;

use crate::engine::{Rule, RuleContext};
use crate::violation::Violation;

/// `str_valid` compiles as a regular expression.
pub struct StringPatternRule;

impl Rule for StringPatternRule {
    fn name(&self) -> &'static str {
        "string-pattern"
    }

    fn progress(&self) -> &'static str {
        "check string lint..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for item in cx.items {
            let Some(pattern) = &item.string_pattern else {
                continue;
            };
            if let Err(e) = Regex::new(pattern) {
                out.push(Violation::InvalidPattern {
                    key: item.key.clone(),
                    reason: e.to_string(),
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
    fn valid_pattern_passes_on_any_type() {
        let mut s = item("name", ItemType::String);
        s.string_pattern = Some("^[a-z0-9_-]{1,32}$".into());
        let mut i = item("count", ItemType::Int);
        i.string_pattern = Some(r"\d+".into());
        assert!(run(&StringPatternRule, &[s, i]).is_empty());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let mut s = item("name", ItemType::String);
        s.string_pattern = Some("([a-z]".into());
        let out = run(&StringPatternRule, &[s]);
        assert_eq!(out.len(), 1);
        assert!(out[0]
            .to_string()
            .starts_with("invalid str_valid setting on item name:"));
    }
}
