//! # Rule Pipeline
//!
//! [`Validator`] runs a fixed sequence of [`Rule`]s over a decoded
//! [`Manifest`]. Rules are independent: each reads the full item list and
//! the configuration, and pushes violations into a scratch buffer. The
//! validator decides, per mode, whether to keep going.
//!
//! Validation is a pure function of the manifest and configuration, so two
//! runs over the same input produce equal reports.

use manilint_core::{Item, Manifest};

use crate::config::ValidatorConfig;
use crate::report::Report;
use crate::rules;
use crate::violation::Violation;

/// Read-only inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Items in declaration order.
    pub items: &'a [Item],
    /// Engine configuration.
    pub config: &'a ValidatorConfig,
}

/// One self-contained check in the pipeline.
pub trait Rule: Send + Sync {
    /// Stable rule name used in reports (e.g. `min-max`).
    fn name(&self) -> &'static str;

    /// Progress line logged before the rule runs.
    fn progress(&self) -> &'static str;

    /// Whether the rule participates under `config`.
    fn applies(&self, _config: &ValidatorConfig) -> bool {
        true
    }

    /// Inspect `cx.items` and push every violation found, in declaration order.
    fn check(&self, cx: &RuleContext<'_>, out: &mut Vec<Violation>);
}

/// The manifest validator.
pub struct Validator {
    config: ValidatorConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator {
    /// Build the standard pipeline.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            rules: rules::pipeline(),
        }
    }

    /// Names of every rule in pipeline order, including ones the current
    /// configuration skips.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run the pipeline over `manifest`.
    pub fn validate(&self, manifest: &Manifest) -> Report {
        self.validate_items(manifest.items())
    }

    /// Run the pipeline over a bare item list.
    pub fn validate_items(&self, items: &[Item]) -> Report {
        let cx = RuleContext {
            items,
            config: &self.config,
        };
        let mut report = Report::new(self.config.mode, items.len());

        for rule in self.rules.iter().filter(|r| r.applies(&self.config)) {
            tracing::info!("{}", rule.progress());
            report.record_rule(rule.name());

            let mut found = Vec::new();
            rule.check(&cx, &mut found);
            if found.is_empty() {
                continue;
            }

            for v in &found {
                tracing::debug!(rule = rule.name(), item = %v.item(), "{v}");
            }

            if self.config.is_fail_fast() {
                found.truncate(1);
                report.extend(rule.name(), found);
                break;
            }
            report.extend(rule.name(), found);
        }

        report
    }
}
