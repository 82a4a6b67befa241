//! Engine configuration from the environment.
//!
//! Variables:
//! - `MANILINT_REPORT_ALL`: collect every violation (default: off)
//! - `MANILINT_STRICT`: enable consistency checks (default: off)
//! - `MANILINT_DENY_DUPLICATE_KEYS`: reject repeated keys (default: off)
//! - `MANILINT_REQUIRED_LOCALES`: comma-separated locales that `name` and
//!   `desc` must carry (default: none)
//!
//! Boolean variables accept `1`, `true`, `yes` or `on` (case-insensitive).
//! Command-line flags are applied on top and can only switch options on.

use manilint_rules::ValidatorConfig;

/// Prefix shared by every variable this crate reads.
pub const ENV_PREFIX: &str = "MANILINT_";

/// Build a configuration from the process environment.
pub fn from_env() -> ValidatorConfig {
    from_lookup(|name| std::env::var(name).ok())
}

/// Build a configuration from an arbitrary variable lookup.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ValidatorConfig {
    let flag = |suffix: &str| {
        lookup(&format!("{ENV_PREFIX}{suffix}"))
            .map(|v| is_truthy(&v))
            .unwrap_or(false)
    };

    let mut config = ValidatorConfig::default();
    if flag("REPORT_ALL") {
        config = config.report_all();
    }
    if flag("STRICT") {
        config = config.strict();
    }
    if flag("DENY_DUPLICATE_KEYS") {
        config = config.deny_duplicate_keys();
    }
    if let Some(locales) = lookup(&format!("{ENV_PREFIX}REQUIRED_LOCALES")) {
        for locale in locales.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            config = config.require_locale(locale);
        }
    }
    config
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
