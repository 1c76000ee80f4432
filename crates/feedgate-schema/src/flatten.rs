//! # Path Flattening
//!
//! Converts a nested metrics tree into a mapping from dotted path to leaf
//! value. Used only by the mandatory-field check, which does lookups by
//! path — iteration order is irrelevant.
//!
//! The walk uses an explicit worklist rather than call-stack recursion, so
//! arbitrarily deep (acyclic) trees flatten without a stack-depth hazard.
//! Values are borrowed from the input tree, not cloned.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Flatten a metrics tree into `dotted path -> leaf value`.
///
/// Sub-maps contribute their keys to the path; any non-map value (scalars,
/// arrays, nulls) becomes an entry keyed by its full dotted path. A
/// first-level key appears bare, with no leading dot.
pub fn flatten_metrics(metrics: &Map<String, Value>) -> HashMap<String, &Value> {
    let mut flattened = HashMap::new();
    let mut worklist: Vec<(String, &Map<String, Value>)> = vec![(String::new(), metrics)];

    while let Some((prefix, map)) = worklist.pop() {
        for (key, value) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::Object(sub) => worklist.push((path, sub)),
                _ => {
                    flattened.insert(path, value);
                }
            }
        }
    }

    flattened
}
