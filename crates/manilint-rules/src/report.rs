//! Validation results.

use serde::Serialize;

use crate::config::ValidationMode;
use crate::violation::{ItemRef, Violation, ViolationCategory};

/// A violation together with the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Name of the producing rule (e.g. `default-value`).
    pub rule: &'static str,
    /// The violation itself.
    pub violation: Violation,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    mode: ValidationMode,
    items_checked: usize,
    rules_run: Vec<&'static str>,
    findings: Vec<Finding>,
}

impl Report {
    pub(crate) fn new(mode: ValidationMode, items_checked: usize) -> Self {
        Self {
            mode,
            items_checked,
            rules_run: Vec::new(),
            findings: Vec::new(),
        }
    }

    pub(crate) fn record_rule(&mut self, rule: &'static str) {
        self.rules_run.push(rule);
    }

    pub(crate) fn extend(&mut self, rule: &'static str, violations: Vec<Violation>) {
        self.findings.extend(
            violations
                .into_iter()
                .map(|violation| Finding { rule, violation }),
        );
    }

    /// True when no rule reported a violation.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Mode the pipeline ran in.
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Number of items in the validated manifest.
    pub fn items_checked(&self) -> usize {
        self.items_checked
    }

    /// Rules that ran, in pipeline order.
    pub fn rules_run(&self) -> &[&'static str] {
        &self.rules_run
    }

    /// All findings, in pipeline then declaration order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Violations without their rule names.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.findings.iter().map(|f| &f.violation)
    }

    /// The first violation, which is the only one in fail-fast mode.
    pub fn first(&self) -> Option<&Violation> {
        self.findings.first().map(|f| &f.violation)
    }

    /// Serializable view for machine-readable output.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            valid: self.is_valid(),
            mode: self.mode,
            items_checked: self.items_checked,
            rules_run: self.rules_run.iter().map(|r| r.to_string()).collect(),
            violations: self
                .findings
                .iter()
                .map(|f| ViolationRecord {
                    rule: f.rule.to_string(),
                    category: f.violation.category(),
                    item: f.violation.item(),
                    message: f.violation.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON-friendly report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Overall pass/fail.
    pub valid: bool,
    /// Mode the pipeline ran in.
    pub mode: ValidationMode,
    /// Number of items in the manifest.
    pub items_checked: usize,
    /// Rules that ran.
    pub rules_run: Vec<String>,
    /// One record per violation.
    pub violations: Vec<ViolationRecord>,
}

/// One violation in a [`ReportSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationRecord {
    /// Producing rule.
    pub rule: String,
    /// Broad class.
    pub category: ViolationCategory,
    /// Offending item.
    pub item: ItemRef,
    /// Human-readable diagnostic.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = Report::new(ValidationMode::FailFast, 4);
        assert!(report.is_valid());
        assert_eq!(report.items_checked(), 4);
        assert!(report.first().is_none());
    }

    #[test]
    fn summary_serializes_violations() {
        let mut report = Report::new(ValidationMode::ReportAll, 1);
        report.record_rule("enabled");
        report.extend(
            "enabled",
            vec![Violation::MultiCondition { key: "a".into() }],
        );
        let json = serde_json::to_value(report.summary()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["mode"], "report-all");
        assert_eq!(json["violations"][0]["rule"], "enabled");
        assert_eq!(json["violations"][0]["category"], "cross-reference");
        assert_eq!(json["violations"][0]["item"]["key"], "a");
        assert_eq!(
            json["violations"][0]["message"],
            "multi condition on item a"
        );
    }
}
