//! # Mandatory Field Checking
//!
//! Confirms that every configured mandatory path is present in the flattened
//! payload with a non-null value. Matching is case-insensitive and
//! short-circuits on the first unmet requirement — this reports the first
//! missing field, not all of them.

use std::collections::HashMap;
use std::collections::HashSet;

use serde_json::Value;

use feedgate_core::{MetricPath, ValidationError};

/// Check the configured mandatory paths against a flattened metrics tree.
///
/// A flattened key satisfies at most one requirement; once consumed it is
/// not considered again. Requirement paths are expected to be unique, so
/// this is bookkeeping rather than a correctness rule.
pub fn check_mandatory_fields(
    required: &[String],
    flattened: &HashMap<String, &Value>,
) -> Result<(), ValidationError> {
    let mut consumed: HashSet<&str> = HashSet::new();

    for requirement in required {
        let satisfied = flattened.iter().find(|(path, value)| {
            !consumed.contains(path.as_str())
                && requirement.eq_ignore_ascii_case(path)
                && !value.is_null()
        });

        match satisfied {
            Some((path, _)) => {
                consumed.insert(path);
            }
            None => {
                return Err(ValidationError::MissingMandatoryField {
                    path: MetricPath::from_dotted(requirement),
                });
            }
        }
    }

    Ok(())
}
