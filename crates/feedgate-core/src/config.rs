//! # Producer Configuration
//!
//! The per-producer configuration record: which entity the producer may post
//! for, whether it is enabled, the allowed-metrics schema, the optional
//! mandatory-field list, and the downstream flow routing the intake service
//! uses after acceptance.
//!
//! Configurations are loaded once (on startup or on demand) and are
//! read-only during request handling; share them by reference across
//! concurrent validations.
//!
//! All records deserialize leniently: an absent field takes its default, so
//! partial configuration documents load without error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The status value that permits a producer to post metrics. Compared
/// case-insensitively.
pub const ENABLED_STATUS: &str = "enabled";

/// A producer's configuration record.
///
/// `allowed_metrics` is kept untyped (`serde_json::Map`): a terminal value
/// is normally a type-tag string, but unrecognized or non-string terminals
/// must flow into validation-time type failures rather than failing here at
/// load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerConfig {
    /// Configuration record identifier.
    pub id: String,
    /// Human-readable producer name.
    pub producer_name: String,
    /// The entity this producer is authorized to post metrics for.
    pub entity: String,
    /// Producer lifecycle status; only [`ENABLED_STATUS`] permits intake.
    pub status: String,
    /// Whether the producer may also read back stored metrics.
    pub allow_get: bool,
    /// When set, the metric-content checks (mandatory fields and tree
    /// match) are bypassed; envelope checks still apply.
    pub skip_validation: bool,
    /// Identifier of the production rollout this configuration belongs to.
    pub production_id: Option<String>,
    /// The allowed-metrics schema: nested sub-maps mirroring the metrics
    /// tree, with type-tag strings at the leaves.
    pub allowed_metrics: Map<String, Value>,
    /// Downstream routing applied to accepted payloads.
    pub flow_config: FlowConfig,
    /// Dotted paths that must be present with non-null values in every
    /// accepted payload. `None` disables the check entirely.
    pub mandatory_fields: Option<Vec<String>>,
    /// Creation timestamp, as recorded by the configuration store.
    pub created_at: String,
    /// Author of the configuration record.
    pub created_by: String,
    /// Last-update timestamp, if the record was ever updated.
    pub updated_at: Option<String>,
    /// Author of the last update, if any.
    pub updated_by: Option<String>,
}

impl ProducerConfig {
    /// Whether the producer status permits intake (case-insensitive).
    pub fn is_enabled(&self) -> bool {
        self.status.eq_ignore_ascii_case(ENABLED_STATUS)
    }

    /// Whether a payload entity matches this configuration
    /// (case-insensitive).
    pub fn entity_matches(&self, entity: &str) -> bool {
        self.entity.eq_ignore_ascii_case(entity)
    }
}

/// Downstream flow routing for accepted payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Queue topic accepted payloads are published to.
    pub queue_topic: String,
    /// Decorations applied to every accepted payload.
    pub decorations: Option<Vec<String>>,
    /// Decorations applied only on first sight of an identifier.
    pub one_time_decorations: Option<Vec<String>>,
    /// Fan-out targets.
    pub outputs: Outputs,
}

/// Fan-out targets an accepted payload is delivered to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outputs {
    /// Search index names.
    pub index_names: Option<Vec<String>>,
    /// Warehouse inbound pipelines.
    pub warehouse_inbounds: Option<Vec<String>>,
    /// Key-value store database names.
    pub kvs_db_names: Option<Vec<String>>,
    /// Object-storage bucket names.
    pub s3_bucket_names: Option<Vec<String>>,
    /// Structured object-storage exports.
    pub s3_exports: Option<Vec<S3Export>>,
    /// Key-value store dataset names.
    pub kvs_ds_names: Option<Vec<String>>,
}

/// One structured object-storage export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Export {
    /// Export stream code.
    pub code: String,
    /// Fields projected into the export; `None` exports everything.
    pub export_fields: Option<Vec<String>>,
    /// Serialization format of the export.
    pub format: String,
}
