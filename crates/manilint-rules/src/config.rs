//! Engine configuration.
//!
//! The defaults give the classic single-error gate: stop at the first
//! violation, no strict consistency checks, duplicate keys tolerated, any
//! locale accepted for names and descriptions.

use serde::{Deserialize, Serialize};

/// How the pipeline reacts to a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Stop at the first violation; the report holds exactly one.
    #[default]
    FailFast,
    /// Run every rule over every item and collect all violations.
    ReportAll,
}

/// Options for a [`Validator`](crate::Validator) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Fail-fast or report-all.
    pub mode: ValidationMode,
    /// Enable cross-field consistency checks (bounds ordering, default range,
    /// default length, boolean `equal` values).
    pub strict: bool,
    /// Treat repeated keys as a structural violation instead of a warning.
    pub deny_duplicate_keys: bool,
    /// Locales that must carry non-empty `name` and `desc` text. Empty means
    /// any single locale suffices.
    pub required_locales: Vec<String>,
}

impl ValidatorConfig {
    /// Collect every violation instead of stopping at the first.
    pub fn report_all(mut self) -> Self {
        self.mode = ValidationMode::ReportAll;
        self
    }

    /// Enable strict consistency checks.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Reject duplicate keys.
    pub fn deny_duplicate_keys(mut self) -> Self {
        self.deny_duplicate_keys = true;
        self
    }

    /// Require non-empty text for `locale`.
    pub fn require_locale(mut self, locale: impl Into<String>) -> Self {
        let locale = locale.into();
        if !self.required_locales.contains(&locale) {
            self.required_locales.push(locale);
        }
        self
    }

    /// True in fail-fast mode.
    pub fn is_fail_fast(&self) -> bool {
        self.mode == ValidationMode::FailFast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fail_fast_and_lenient() {
        let cfg = ValidatorConfig::default();
        assert!(cfg.is_fail_fast());
        assert!(!cfg.strict);
        assert!(!cfg.deny_duplicate_keys);
        assert!(cfg.required_locales.is_empty());
    }

    #[test]
    fn builder_methods_compose() {
        let cfg = ValidatorConfig::default()
            .report_all()
            .strict()
            .require_locale("zh")
            .require_locale("zh");
        assert_eq!(cfg.mode, ValidationMode::ReportAll);
        assert!(cfg.strict);
        assert_eq!(cfg.required_locales, vec!["zh"]);
    }
}
