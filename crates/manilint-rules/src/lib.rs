//! # manilint-rules — Manifest Validation Engine
//!
//! A fixed pipeline of independent rule checks over a decoded manifest.
//!
//! ## Validation Layers
//!
//! 1. **Structural**: required fields present; optionally, keys unique.
//! 2. **Typed values**: `default`, `min`, `max` follow the declared type's
//!    grammar (integers, byte quantities, durations, `host:port`, ...).
//! 3. **Domain**: `csv_valid` membership, `str_valid` compilation, and the
//!    type restrictions of `len` and `allow_relative`.
//! 4. **Cross-reference**: `enabled.when` targets resolve and fit the
//!    condition kind.
//! 5. **Consistency** (strict mode): ordered bounds, default within range.
//!
//! ## Usage
//!
//! ```
//! use manilint_core::Manifest;
//! use manilint_rules::{Validator, ValidatorConfig};
//!
//! let manifest = Manifest::from_yaml_str(
//!     "- {key: port, name: Port, desc: Listen address, type: network-address, default: '0.0.0.0:8080'}",
//! )
//! .unwrap();
//! let report = Validator::new(ValidatorConfig::default()).validate(&manifest);
//! assert!(report.is_valid());
//! ```

pub mod config;
pub mod engine;
pub mod report;
pub mod rules;
pub mod violation;

pub use config::{ValidationMode, ValidatorConfig};
pub use engine::{Rule, RuleContext, Validator};
pub use report::{Finding, Report, ReportSummary, ViolationRecord};
pub use violation::{ItemRef, ValueSlot, Violation, ViolationCategory};
