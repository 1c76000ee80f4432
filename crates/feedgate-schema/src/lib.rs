//! # feedgate-schema — Payload Validation Against Producer Configuration
//!
//! The validation subsystem of Feedgate. Given a submitted metric payload
//! and a producer configuration, it confirms every leaf path in the metrics
//! tree exists in the configuration's allowed-metrics schema with a matching
//! type, confirms the configured mandatory paths are present with non-null
//! values, and reports the exact failing dotted path on rejection.
//!
//! ## Architecture
//!
//! ```text
//! loader (bytes/files)        validate (orchestrator)
//!   ProducerConfig       -->    envelope checks
//!   Payload                     mandatory  <-- flatten
//!                               tree match <-- matcher <-- leaf
//! ```
//!
//! Validation is a pure, synchronous computation: no I/O, no cross-call
//! state. Configurations are shared by reference; every invocation owns its
//! path-tracking state, so any number of validations may run concurrently.

pub mod flatten;
pub mod leaf;
pub mod loader;
pub mod mandatory;
pub mod matcher;
pub mod validate;

// Re-export primary entry points.
pub use flatten::flatten_metrics;
pub use leaf::leaf_type_matches;
pub use loader::{
    payload_from_slice, producer_config_from_json_file, producer_config_from_slice,
    producer_config_from_yaml_file, LoadError,
};
pub use mandatory::check_mandatory_fields;
pub use matcher::{TreeMatcher, DEFAULT_MAX_DEPTH};
pub use validate::{validate_payload, validate_payload_bytes, IngestError, PayloadValidator};
