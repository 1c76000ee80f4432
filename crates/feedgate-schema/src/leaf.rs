//! # Leaf Type Checking
//!
//! The small ad-hoc type system for metric leaves. A leaf's declared type is
//! a string tag in the allowed-metrics schema; [`leaf_type_matches`] decides
//! whether a submitted value satisfies a tag.
//!
//! The date/time/datetime tags are format checks only — digit-range
//! patterns, no calendar validity. `"2024-02-31"` is a valid `date`.
//! Matching is unanchored substring search; both behaviors are part of the
//! wire contract.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// `YYYY-MM-DD` with a 19xx/20xx year, month 01-12, day 01-31.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("((19|20)..)-(0[1-9]|1[012])-(0[1-9]|1[0-9]|2[0-9]|3[01])")
        .expect("date pattern is valid")
});

/// `HH:MM:SS` with hour 00-23, minute and second 00-59.
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("(0[0-9]|1[0-9]|2[0-3]):(0[0-9]|1[0-9]|2[0-9]|3[0-9]|4[0-9]|5[0-9]):(0[0-9]|1[0-9]|2[0-9]|3[0-9]|4[0-9]|5[0-9])")
        .expect("time pattern is valid")
});

/// Date + `T` + time + at least one trailing character (zone offset or
/// fraction, content unchecked).
static DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("((19|20)..)-(0[1-9]|1[012])-(0[1-9]|1[0-9]|2[0-9]|3[01])T(0[0-9]|1[0-9]|2[0-3]):(0[0-9]|1[0-9]|2[0-9]|3[0-9]|4[0-9]|5[0-9]):(0[0-9]|1[0-9]|2[0-9]|3[0-9]|4[0-9]|5[0-9])(.+)")
        .expect("datetime pattern is valid")
});

/// Decide whether a leaf value satisfies a declared type tag.
///
/// Pure and deterministic: the result depends only on `(value, type_tag)`.
/// An unrecognized tag matches nothing — the caller cannot distinguish a
/// wrong value from a misconfigured tag, and that conflation is part of the
/// contract.
///
/// Null never reaches this function; the tree matcher treats a null leaf as
/// "no value submitted" and accepts it without consulting the schema.
pub fn leaf_type_matches(value: &Value, type_tag: &str) -> bool {
    match value {
        Value::Number(n) => match type_tag {
            "number" => true,
            "boolean_number" => n.as_f64().map_or(false, |f| f == 0.0 || f == 1.0),
            _ => false,
        },
        Value::String(s) => match type_tag {
            "string" => true,
            "date" => DATE_RE.is_match(s),
            "time" => TIME_RE.is_match(s),
            "datetime" => DATETIME_RE.is_match(s),
            _ => false,
        },
        Value::Bool(_) => matches!(type_tag, "bool" | "boolean"),
        Value::Array(_) => type_tag == "array",
        _ => false,
    }
}
