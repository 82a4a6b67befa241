//! # manilint-cli — Manifest Gate for CI
//!
//! Provides the `manilint` command-line interface: validate one manifest
//! and exit non-zero when it is not safe to ship.
//!
//! ```bash
//! manilint manifest.yaml
//! manilint manifest.yaml --report-all --format json
//! MANILINT_STRICT=1 manilint manifest.yaml --require-locale zh
//! ```

pub mod config;
pub mod validate;
