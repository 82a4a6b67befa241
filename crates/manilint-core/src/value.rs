//! # Typed Values
//!
//! Manifest documents carry `default`, `min` and `max` as untyped YAML. This
//! module converts them into [`TypedValue`], a tagged variant keyed by
//! [`ItemType`], through one explicit constructor per slot. After conversion
//! no rule inspects raw YAML representations again.

use std::cmp::Ordering;
use std::time::Duration;

use byte_unit::Byte;
use serde_yaml::Value;

use crate::address::NetworkAddress;
use crate::error::ValueError;
use crate::item_type::ItemType;

/// A manifest value that conforms to the grammar of its item type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// `string` value.
    String(String),
    /// `csv` value; every element rendered as text.
    Csv(Vec<String>),
    /// `int` value.
    Int(i64),
    /// `uint` value. The sign is only checked in strict mode.
    Uint(i64),
    /// `float` value.
    Float(f64),
    /// `bool` value.
    Bool(bool),
    /// `network-address` value.
    NetworkAddress(NetworkAddress),
    /// `path` value.
    Path(String),
    /// `byte-size` value in bytes.
    ByteSize(u64),
    /// `duration` value in signed nanoseconds.
    Duration(i64),
}

impl TypedValue {
    /// Convert a raw `default` value according to `item_type`.
    pub fn default_for(item_type: ItemType, raw: &Value) -> Result<Self, ValueError> {
        match item_type {
            ItemType::String => expect_str(raw).map(|s| TypedValue::String(s.to_string())),
            ItemType::Path => expect_str(raw).map(|s| TypedValue::Path(s.to_string())),
            ItemType::Csv => csv_elements(raw).map(TypedValue::Csv),
            ItemType::Int => expect_int(raw, item_type).map(TypedValue::Int),
            ItemType::Uint => expect_int(raw, item_type).map(TypedValue::Uint),
            ItemType::Float => expect_float(raw).map(TypedValue::Float),
            ItemType::Bool => match raw {
                Value::Bool(b) => Ok(TypedValue::Bool(*b)),
                other => Err(mismatch("boolean", other)),
            },
            ItemType::NetworkAddress => {
                let s = expect_str(raw)?;
                s.parse::<NetworkAddress>()
                    .map(TypedValue::NetworkAddress)
                    .map_err(|source| ValueError::NetworkAddress {
                        input: s.to_string(),
                        source,
                    })
            }
            ItemType::ByteSize => parse_byte_size(expect_str(raw)?).map(TypedValue::ByteSize),
            ItemType::Duration => parse_duration(expect_str(raw)?).map(TypedValue::Duration),
        }
    }

    /// Convert a raw `min` or `max` value according to `item_type`.
    ///
    /// Returns [`ValueError::NotBounded`] for types that do not carry bounds.
    pub fn bound_for(item_type: ItemType, raw: &Value) -> Result<Self, ValueError> {
        match item_type {
            ItemType::Int => expect_int(raw, item_type).map(TypedValue::Int),
            ItemType::Uint => expect_int(raw, item_type).map(TypedValue::Uint),
            ItemType::Float => expect_float(raw).map(TypedValue::Float),
            ItemType::ByteSize => parse_byte_size(expect_str(raw)?).map(TypedValue::ByteSize),
            ItemType::Duration => parse_duration(expect_str(raw)?).map(TypedValue::Duration),
            other => Err(ValueError::NotBounded(other.as_str())),
        }
    }

    /// Order two values of the same ordered type. `None` for unordered types,
    /// mismatched variants, or NaN floats.
    pub fn compare(&self, other: &TypedValue) -> Option<Ordering> {
        match (self, other) {
            (TypedValue::Int(a), TypedValue::Int(b)) => Some(a.cmp(b)),
            (TypedValue::Uint(a), TypedValue::Uint(b)) => Some(a.cmp(b)),
            (TypedValue::Float(a), TypedValue::Float(b)) => a.partial_cmp(b),
            (TypedValue::ByteSize(a), TypedValue::ByteSize(b)) => Some(a.cmp(b)),
            (TypedValue::Duration(a), TypedValue::Duration(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Character count for textual values.
    pub fn text_len(&self) -> Option<usize> {
        match self {
            TypedValue::String(s) | TypedValue::Path(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Human-readable rendering used in diagnostics.
    pub fn render(&self) -> String {
        match self {
            TypedValue::String(s) | TypedValue::Path(s) => s.clone(),
            TypedValue::Csv(items) => format!("[{}]", items.join(", ")),
            TypedValue::Int(v) => v.to_string(),
            TypedValue::Uint(v) => v.to_string(),
            TypedValue::Float(v) => v.to_string(),
            TypedValue::Bool(v) => v.to_string(),
            TypedValue::NetworkAddress(a) => a.to_string(),
            TypedValue::ByteSize(v) => format!("{v}B"),
            TypedValue::Duration(nanos) => {
                let magnitude =
                    humantime::format_duration(Duration::from_nanos(nanos.unsigned_abs()));
                if *nanos < 0 {
                    format!("-{magnitude}")
                } else {
                    magnitude.to_string()
                }
            }
        }
    }
}

/// Render a YAML scalar as text. `None` for sequences, mappings and null.
///
/// Floats with an integral value print without a fractional part, so `1.0`
/// renders as `1`.
pub fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Some(float_text(f)),
            _ => Some(n.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "+Inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Name of a raw value's representation, for diagnostics.
pub fn representation(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Parse a human-readable byte quantity (`10MB`, `4 KiB`, `512`).
pub fn parse_byte_size(input: &str) -> Result<u64, ValueError> {
    Byte::parse_str(input, true)
        .map(|b| b.as_u64())
        .map_err(|e| ValueError::ByteSize {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Units a duration term may carry, with their length in nanoseconds.
const DURATION_UNITS: [(&str, u64); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// One `<number><unit>` term of a duration, e.g. `1.5h`.
struct DurationTerm<'a> {
    whole: &'a str,
    fraction: &'a str,
    unit: &'a str,
    unit_nanos: u64,
}

/// Parse a signed duration (`5s`, `-1h30m`, `1.5h`, `250ms`) into nanoseconds.
///
/// A duration is an optional sign followed by one or more decimal terms, each
/// with a unit from `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`. A bare `0` is
/// allowed. Calendar units (`d`, `w`, `M`, `y`) and whitespace between terms
/// are rejected. The result must fit a signed 64-bit nanosecond count;
/// sub-nanosecond fractions are truncated.
pub fn parse_duration(input: &str) -> Result<i64, ValueError> {
    let fail = |reason: String| ValueError::Duration {
        input: input.to_string(),
        reason,
    };

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if body == "0" {
        return Ok(0);
    }
    if body.is_empty() {
        return Err(fail("empty duration".to_string()));
    }

    let limit: u128 = if negative { 1 << 63 } else { i64::MAX as u128 };
    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let (term, tail) = split_duration_term(rest).map_err(fail)?;
        total += term_nanos(&term).map_err(fail)?;
        if total > limit {
            return Err(fail("value out of range".to_string()));
        }
        rest = tail;
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    i64::try_from(signed).map_err(|_| fail("value out of range".to_string()))
}

fn split_duration_term(s: &str) -> Result<(DurationTerm<'_>, &str), String> {
    let digits = |t: &str| t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());

    let whole_len = digits(s);
    let (whole, rest) = s.split_at(whole_len);
    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after) => after.split_at(digits(after)),
        None => ("", rest),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(format!("expected number at \"{s}\""));
    }

    let unit_len = rest
        .find(|c: char| c == '.' || c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (unit, tail) = rest.split_at(unit_len);
    if unit.is_empty() {
        return Err(format!("missing unit after \"{whole}\""));
    }
    let unit_nanos = DURATION_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, nanos)| *nanos)
        .ok_or_else(|| format!("unknown unit \"{unit}\""))?;

    Ok((
        DurationTerm {
            whole,
            fraction,
            unit,
            unit_nanos,
        },
        tail,
    ))
}

fn term_nanos(term: &DurationTerm<'_>) -> Result<u128, String> {
    let mut nanos = 0u128;
    if !term.whole.is_empty() {
        // humantime spells micro with U+00B5 only; normalize the Greek mu.
        let unit = if term.unit_nanos == 1_000 { "us" } else { term.unit };
        let whole = humantime::parse_duration(&format!("{}{unit}", term.whole))
            .map_err(|e| e.to_string())?;
        nanos += whole.as_nanos();
    }
    if !term.fraction.is_empty() {
        // Digits past the 19th cannot contribute a whole nanosecond.
        let digits = &term.fraction[..term.fraction.len().min(19)];
        let numerator: u128 = digits.parse().map_err(|_| "invalid fraction".to_string())?;
        let scale = 10u128.pow(digits.len() as u32);
        nanos += numerator * u128::from(term.unit_nanos) / scale;
    }
    Ok(nanos)
}

fn mismatch(expected: &'static str, found: &Value) -> ValueError {
    ValueError::Representation {
        expected,
        found: representation(found),
    }
}

fn expect_str(raw: &Value) -> Result<&str, ValueError> {
    raw.as_str().ok_or_else(|| mismatch("string", raw))
}

fn expect_int(raw: &Value, item_type: ItemType) -> Result<i64, ValueError> {
    match raw {
        Value::Number(n) if n.is_f64() => Err(mismatch("integer", raw)),
        Value::Number(n) => n.as_i64().ok_or_else(|| ValueError::OutOfRange {
            value: n.to_string(),
            item_type: item_type.as_str(),
        }),
        other => Err(mismatch("integer", other)),
    }
}

fn expect_float(raw: &Value) -> Result<f64, ValueError> {
    match raw {
        Value::Number(n) => n.as_f64().ok_or_else(|| mismatch("number", raw)),
        other => Err(mismatch("number", other)),
    }
}

fn csv_elements(raw: &Value) -> Result<Vec<String>, ValueError> {
    let Value::Sequence(seq) = raw else {
        return Err(mismatch("sequence", raw));
    };
    seq.iter()
        .enumerate()
        .map(|(index, v)| scalar_text(v).ok_or(ValueError::NonScalarElement { index }))
        .collect()
}
