//! # Metric Paths
//!
//! The dotted-path newtype used for validation descent and error reporting.
//!
//! A [`MetricPath`] is an ordered sequence of keys locating a node in a
//! metrics tree. During validation it is mutated only by push (entering a
//! child) and pop (leaving a child); errors carry an owned copy, so the
//! working path is never shared between calls.

use serde::{Deserialize, Serialize};

/// An ordered sequence of keys locating a node in a nested metrics tree.
///
/// Displays in dotted form (e.g. `shipping.delivery_time.p95`). The first
/// segment is bare — there is no leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricPath(Vec<String>);

impl MetricPath {
    /// Create an empty path (the metrics-tree root).
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a path from a dotted string, splitting on `.`.
    ///
    /// An empty input yields the root path.
    pub fn from_dotted(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::new();
        }
        Self(dotted.split('.').map(str::to_string).collect())
    }

    /// Append a segment (descend into a child).
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Remove and return the final segment (backtrack to the parent).
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Number of segments in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments in descent order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment, if any — the key of the node the path points at.
    pub fn leaf_key(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// An owned copy of the first `len` segments.
    ///
    /// Used for deepest-reached-path error reporting: when a lookup fails
    /// partway down, the reported path ends at the first unresolvable
    /// segment. A `len` beyond the current length yields the whole path.
    pub fn truncated(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }

    /// The dotted rendering of the path.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl std::fmt::Display for MetricPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

impl From<Vec<String>> for MetricPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<const N: usize> From<[&str; N]> for MetricPath {
    fn from(segments: [&str; N]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_track_descent() {
        let mut path = MetricPath::new();
        assert!(path.is_empty());

        path.push("shipping");
        path.push("delivery_time");
        assert_eq!(path.len(), 2);
        assert_eq!(path.leaf_key(), Some("delivery_time"));

        assert_eq!(path.pop().as_deref(), Some("delivery_time"));
        assert_eq!(path.len(), 1);
        assert_eq!(path.leaf_key(), Some("shipping"));
    }

    #[test]
    fn dotted_rendering_has_no_leading_dot() {
        let path = MetricPath::from(["a", "b", "c"]);
        assert_eq!(path.dotted(), "a.b.c");
        assert_eq!(format!("{path}"), "a.b.c");

        let single = MetricPath::from(["a"]);
        assert_eq!(single.dotted(), "a");
    }

    #[test]
    fn from_dotted_round_trips() {
        let path = MetricPath::from_dotted("a.b.c");
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.dotted(), "a.b.c");

        assert!(MetricPath::from_dotted("").is_empty());
    }

    #[test]
    fn truncated_clamps_to_length() {
        let path = MetricPath::from(["a", "b", "c"]);
        assert_eq!(path.truncated(2), MetricPath::from(["a", "b"]));
        assert_eq!(path.truncated(0), MetricPath::new());
        assert_eq!(path.truncated(10), path);
    }
}
