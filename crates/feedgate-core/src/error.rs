//! # Validation Error Hierarchy
//!
//! Structured rejection reasons for payload validation, built with
//! `thiserror`. Every variant is a request-level rejection — nothing here is
//! process-fatal, and validation never retries (it is deterministic and
//! side-effect-free).
//!
//! Errors that point at a position in the metrics tree carry an owned
//! [`MetricPath`], exposed uniformly through [`ValidationError::path`] so
//! callers can report the offending dotted path without matching on the
//! variant.

use serde_json::Value;
use thiserror::Error;

use crate::path::MetricPath;

/// A payload rejection produced by the validation orchestrator or one of its
/// sub-checks. A payload is wholly valid or wholly rejected on the first
/// failing check; no aggregation across multiple bad leaves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Both identifier and entity are absent from the payload.
    #[error("payload does not contain a valid id and entity")]
    MissingIdentity,

    /// The payload carries an entity but no identifier.
    #[error("payload does not contain a valid id")]
    MissingId,

    /// The payload carries an identifier but no entity.
    #[error("payload does not contain a valid entity")]
    MissingEntity,

    /// The metrics block is entirely absent or null. An empty map `{}` is
    /// accepted and means "no new metrics to record"; null is not.
    #[error("metrics block can't be null; send an empty map {{}} instead of null when there are no new metrics")]
    MissingMetricsBlock,

    /// The payload's entity does not match the configured entity.
    #[error("provided entity \"{payload_entity}\" does not match the one in the producer configuration (\"{config_entity}\")")]
    UnauthorizedEntity {
        /// The entity named by the payload.
        payload_entity: String,
        /// The entity the producer configuration is scoped to.
        config_entity: String,
    },

    /// The producer configuration is not in the enabled state.
    #[error("producer not enabled (status \"{status}\")")]
    ProducerDisabled {
        /// The configured status that blocked the payload.
        status: String,
    },

    /// A mandatory field is absent from the payload, or present with a null
    /// value.
    #[error("missing mandatory field: {path}")]
    MissingMandatoryField {
        /// The required dotted path that no flattened payload path satisfied.
        path: MetricPath,
    },

    /// A submitted leaf path has no counterpart in the allowed-metrics
    /// schema. The path ends at the first segment the schema could not
    /// resolve (deepest-reached-path reporting).
    #[error("invalid metric name at {path}")]
    InvalidMetricPath {
        /// Path truncated to the first unresolvable segment.
        path: MetricPath,
    },

    /// A submitted leaf sits where the allowed-metrics schema expects deeper
    /// structure.
    #[error("invalid metric level at {path}")]
    InvalidMetricLevel {
        /// The full path of the offending leaf.
        path: MetricPath,
    },

    /// A submitted leaf's value does not satisfy the type tag declared for
    /// its path. Unrecognized type tags fail the same way — the schema does
    /// not distinguish a wrong value from a misconfigured tag.
    #[error("field '{field}' with different data type, sent value: {value} at {path}")]
    MetricTypeMismatch {
        /// The full path of the offending leaf.
        path: MetricPath,
        /// The leaf's key, for the human-readable message.
        field: String,
        /// The offending value as submitted.
        value: Value,
    },

    /// The metrics tree descended past the configured depth bound.
    #[error("metrics tree exceeds the maximum depth of {max_depth} at {path}")]
    DepthExceeded {
        /// The path of the sub-map that would have exceeded the bound.
        path: MetricPath,
        /// The configured bound.
        max_depth: usize,
    },
}

impl ValidationError {
    /// The metrics-tree path this rejection points at, when it has one.
    ///
    /// Identity, metrics-block, entity, and status rejections concern the
    /// payload envelope rather than a tree position and return `None`.
    pub fn path(&self) -> Option<&MetricPath> {
        match self {
            Self::MissingMandatoryField { path }
            | Self::InvalidMetricPath { path }
            | Self::InvalidMetricLevel { path }
            | Self::MetricTypeMismatch { path, .. }
            | Self::DepthExceeded { path, .. } => Some(path),
            _ => None,
        }
    }
}
