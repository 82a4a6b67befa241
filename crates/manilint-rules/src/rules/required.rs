//! Required fields: key, name, description and type.

use manilint_core::LocalizedText;

use crate::engine::{Rule, RuleContext};
use crate::violation::{ItemRef, Violation};

/// Every item must carry a key, a name, a description and a type.
pub struct RequiredRule;

impl Rule for RequiredRule {
    fn name(&self) -> &'static str {
        "required"
    }

    fn progress(&self) -> &'static str {
        "check required fields..."
    }

    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>) {
        for (index, item) in cx.items.iter().enumerate() {
            let item_ref = ItemRef::of(item, index + 1);
            if item.key.is_empty() {
                out.push(Violation::MissingField {
                    item: item_ref.clone(),
                    field: "key".into(),
                });
            }
            missing_text(&item.name, "name", &item_ref, &cx.config.required_locales, out);
            missing_text(
                &item.description,
                "desc",
                &item_ref,
                &cx.config.required_locales,
                out,
            );
            if item.item_type.is_none() {
                out.push(Violation::MissingField {
                    item: item_ref,
                    field: "type".into(),
                });
            }
        }
    }
}

fn missing_text(
    text: &LocalizedText,
    field: &str,
    item: &ItemRef,
    required_locales: &[String],
    out: &mut Vec<Violation>,
) {
    if required_locales.is_empty() {
        if !text.is_present() {
            out.push(Violation::MissingField {
                item: item.clone(),
                field: field.to_string(),
            });
        }
        return;
    }
    for locale in required_locales {
        if text.get(locale).is_none() {
            out.push(Violation::MissingField {
                item: item.clone(),
                field: format!("{field}.{locale}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::rules::fixtures::{item, run, run_with};
    use manilint_core::{Item, ItemType};

    #[test]
    fn complete_item_passes() {
        assert!(run(&RequiredRule, &[item("port", ItemType::Int)]).is_empty());
    }

    #[test]
    fn missing_key_reported_by_position() {
        let out = run(
            &RequiredRule,
            &[item("a", ItemType::Int), item("", ItemType::Int)],
        );
        assert_eq!(out[0].to_string(), "missing key on item 2");
    }

    #[test]
    fn each_missing_field_is_named() {
        let bare = Item {
            key: "port".into(),
            ..Item::default()
        };
        let messages: Vec<String> = run(&RequiredRule, &[bare])
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "missing name on item port",
                "missing desc on item port",
                "missing type on item port",
            ]
        );
    }

    #[test]
    fn required_locale_is_enforced() {
        let mut en_only = item("port", ItemType::Int);
        en_only.name = manilint_core::LocalizedText::new("en", "Port");
        let config = ValidatorConfig::default().require_locale("zh");
        let out = run_with(&RequiredRule, &[en_only], &config);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to_string(), "missing name.zh on item port");
    }
}
