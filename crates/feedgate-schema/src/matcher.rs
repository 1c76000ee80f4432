//! # Tree Matching
//!
//! The central recursive algorithm: a depth-first, pre-order co-descent of
//! the submitted metrics tree and the allowed-metrics schema. Every non-null
//! leaf must sit on a path the schema resolves to a type tag, and its value
//! must satisfy that tag.
//!
//! The schema position is tracked by a cursor advanced alongside the payload
//! descent. Cursor rules preserve the historical deepest-reached-path error
//! semantics:
//!
//! - A failed key lookup does not error immediately — it marks the cursor
//!   dead at that depth, and an error is raised only if a non-null leaf is
//!   eventually reached underneath. The reported path ends at the first
//!   unresolvable segment. A sub-map with no leaves under it never errors.
//! - A schema that terminates in a type tag above a submitted sub-map stays
//!   on that tag; every leaf underneath is checked against it.
//!
//! The first error anywhere aborts the whole match; results are explicit
//! `Result` values threaded up the call stack, and the working path is
//! call-local. Errors carry an owned copy of the path, so there is nothing
//! to restore on the error path.

use serde_json::{Map, Value};

use feedgate_core::{MetricPath, ValidationError};

use crate::leaf::leaf_type_matches;

/// Default bound on metrics-tree descent depth.
///
/// The algorithm itself has no depth limit; payloads nested past the bound
/// are rejected with [`ValidationError::DepthExceeded`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Schema position relative to the current payload node.
#[derive(Clone, Copy)]
enum SchemaCursor<'a> {
    /// Aligned with a schema sub-map.
    Level(&'a Map<String, Value>),
    /// The schema terminated in a type tag at or above this level.
    Tag(&'a Value),
    /// A key lookup failed; holds the index of the first unresolvable
    /// path segment.
    Dead(usize),
}

impl<'a> SchemaCursor<'a> {
    /// Advance the cursor for a payload key at 0-based depth `depth`.
    fn descend(&self, key: &str, depth: usize) -> SchemaCursor<'a> {
        match *self {
            SchemaCursor::Level(map) => match map.get(key) {
                Some(Value::Object(sub)) => SchemaCursor::Level(sub),
                Some(tag) => SchemaCursor::Tag(tag),
                None => SchemaCursor::Dead(depth),
            },
            tag_or_dead => tag_or_dead,
        }
    }
}

/// Co-descending matcher for a submitted metrics tree against an
/// allowed-metrics schema.
///
/// Stateless apart from the configured depth bound; one matcher may be
/// reused across any number of concurrent checks.
#[derive(Debug, Clone, Copy)]
pub struct TreeMatcher {
    max_depth: usize,
}

impl Default for TreeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeMatcher {
    /// A matcher with the default depth bound.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// A matcher with an explicit depth bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Check every leaf of `metrics` against `allowed`.
    ///
    /// Returns the first failure: an invalid path, an invalid level, a type
    /// mismatch, or an exceeded depth bound. An empty tree trivially passes.
    pub fn check(
        &self,
        metrics: &Map<String, Value>,
        allowed: &Map<String, Value>,
    ) -> Result<(), ValidationError> {
        let mut path = MetricPath::new();
        self.check_map(metrics, SchemaCursor::Level(allowed), &mut path)
    }

    fn check_map(
        &self,
        map: &Map<String, Value>,
        cursor: SchemaCursor<'_>,
        path: &mut MetricPath,
    ) -> Result<(), ValidationError> {
        if path.len() >= self.max_depth {
            return Err(ValidationError::DepthExceeded {
                path: path.clone(),
                max_depth: self.max_depth,
            });
        }

        for (key, value) in map {
            path.push(key.clone());
            let next = cursor.descend(key, path.len() - 1);
            self.check_value(value, next, path)?;
            path.pop();
        }

        Ok(())
    }

    fn check_value(
        &self,
        value: &Value,
        cursor: SchemaCursor<'_>,
        path: &mut MetricPath,
    ) -> Result<(), ValidationError> {
        // A null leaf means "no value submitted" and passes unconditionally,
        // before any schema lookup.
        if value.is_null() {
            return Ok(());
        }

        match value {
            Value::Object(children) => self.check_map(children, cursor, path),
            leaf => match cursor {
                SchemaCursor::Dead(first_bad) => Err(ValidationError::InvalidMetricPath {
                    path: path.truncated(first_bad + 1),
                }),
                SchemaCursor::Level(_) => Err(ValidationError::InvalidMetricLevel {
                    path: path.clone(),
                }),
                SchemaCursor::Tag(tag) => {
                    // A non-string terminal in the schema matches nothing and
                    // fails exactly like an unrecognized tag.
                    let type_tag = tag.as_str().unwrap_or_default();
                    if leaf_type_matches(leaf, type_tag) {
                        Ok(())
                    } else {
                        Err(ValidationError::MetricTypeMismatch {
                            path: path.clone(),
                            field: path.leaf_key().unwrap_or_default().to_string(),
                            value: leaf.clone(),
                        })
                    }
                }
            },
        }
    }
}
