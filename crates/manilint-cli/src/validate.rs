//! # Validate Command
//!
//! Loads one manifest, runs the rule pipeline, and renders the report.
//!
//! Returns exit code: 0 on success, 1 on validation failure. Load and decode
//! failures propagate as errors and become exit code 2 in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use manilint_core::Manifest;
use manilint_rules::{Report, Validator, ValidatorConfig};

/// Report rendering.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Arguments for validating a manifest.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the manifest file (a YAML sequence of items).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Collect every violation instead of stopping at the first.
    #[arg(long)]
    pub report_all: bool,

    /// Also check bounds ordering, default ranges and default lengths.
    #[arg(long)]
    pub strict: bool,

    /// Treat repeated keys as a violation.
    #[arg(long)]
    pub deny_duplicate_keys: bool,

    /// Require `name` and `desc` text for this locale. Repeatable.
    #[arg(long = "require-locale", value_name = "LOCALE")]
    pub require_locales: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    /// Layer the command-line switches over `base`.
    pub fn apply(&self, base: ValidatorConfig) -> ValidatorConfig {
        let mut config = base;
        if self.report_all {
            config = config.report_all();
        }
        if self.strict {
            config = config.strict();
        }
        if self.deny_duplicate_keys {
            config = config.deny_duplicate_keys();
        }
        for locale in &self.require_locales {
            config = config.require_locale(locale.as_str());
        }
        config
    }
}

/// Execute the validate command with `base` as the environment-derived
/// configuration.
pub fn run_validate(args: &ValidateArgs, base: ValidatorConfig) -> Result<u8> {
    let config = args.apply(base);
    tracing::debug!(?config, "resolved validator configuration");

    tracing::info!("decoding...");
    let manifest = Manifest::load(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;

    let report = Validator::new(config).validate(&manifest);

    match args.format {
        OutputFormat::Text => print_text(&report, &args.manifest),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.summary())
                .context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(if report.is_valid() { 0 } else { 1 })
}

fn print_text(report: &Report, path: &Path) {
    if report.is_valid() {
        println!(
            "{}: {} item(s) passed {} rule(s)",
            path.display(),
            report.items_checked(),
            report.rules_run().len()
        );
        return;
    }

    for finding in report.findings() {
        println!("  FAIL [{}] {}", finding.rule, finding.violation);
    }
    println!(
        "\n{} violation(s) in {}",
        report.findings().len(),
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use manilint_rules::ValidationMode;

    fn args(path: PathBuf) -> ValidateArgs {
        ValidateArgs {
            manifest: path,
            report_all: false,
            strict: false,
            deny_duplicate_keys: false,
            require_locales: Vec::new(),
            format: OutputFormat::Text,
        }
    }

    fn write_manifest(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("manifest.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn flags_switch_options_on() {
        let mut a = args(PathBuf::from("m.yaml"));
        a.report_all = true;
        a.require_locales = vec!["zh".into()];
        let cfg = a.apply(ValidatorConfig::default());
        assert_eq!(cfg.mode, ValidationMode::ReportAll);
        assert_eq!(cfg.required_locales, vec!["zh"]);
        assert!(!cfg.strict);
    }

    #[test]
    fn flags_do_not_switch_env_options_off() {
        let a = args(PathBuf::from("m.yaml"));
        let cfg = a.apply(ValidatorConfig::default().strict());
        assert!(cfg.strict);
    }

    #[test]
    fn valid_manifest_returns_0() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            "- {key: port, name: Port, desc: Listen, type: naddr, default: '0.0.0.0:8080'}\n",
        );
        assert_eq!(run_validate(&args(path), ValidatorConfig::default()).unwrap(), 0);
    }

    #[test]
    fn invalid_manifest_returns_1() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            "- {key: port, name: Port, desc: Listen, type: naddr, default: '0.0.0.0:70000'}\n",
        );
        assert_eq!(run_validate(&args(path), ValidatorConfig::default()).unwrap(), 1);
    }

    #[test]
    fn json_format_returns_same_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, "- {key: a, name: A, desc: A, type: int, len: 3}\n");
        let mut a = args(path);
        a.format = OutputFormat::Json;
        assert_eq!(run_validate(&a, ValidatorConfig::default()).unwrap(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_validate(
            &args(dir.path().join("absent.yaml")),
            ValidatorConfig::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("manifest not found"));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, "- {key: a, name: A, desc: A, type: enum}\n");
        let err = run_validate(&args(path), ValidatorConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported type: enum"));
    }
}
