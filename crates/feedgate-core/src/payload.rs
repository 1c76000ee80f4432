//! # Payload Records
//!
//! The wire-level payload a producer submits, and the sanitized view the
//! validator hands back on acceptance.
//!
//! A [`Payload`] is constructed fresh per validation call and discarded
//! afterwards. Its `metrics` field distinguishes an entirely absent (or
//! null) block from a present-but-empty map: the former is a rejection, the
//! latter means "no new metrics to record" and is accepted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A submitted metric payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    /// The entity the metrics belong to.
    pub entity: String,
    /// The identifier of the record the metrics describe.
    pub id: String,
    /// The metrics tree. `None` when the block was absent or null on the
    /// wire — distinct from `Some` of an empty map.
    pub metrics: Option<Map<String, Value>>,
    /// The producer token the intake layer resolved the configuration from.
    /// Not part of the wire format; attached after deserialization.
    #[serde(skip)]
    pub producer_token: String,
}

impl Payload {
    /// Attach the producer token supplied by the intake layer.
    pub fn with_producer_token(mut self, token: impl Into<String>) -> Self {
        self.producer_token = token.into();
        self
    }
}

/// The sanitized view of an accepted payload.
///
/// The validator never mutates the caller's [`Payload`]; on acceptance it
/// copies the accepted fields into a fresh record for the downstream flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedPayload {
    /// The identifier of the record the metrics describe.
    pub id: String,
    /// The entity the metrics belong to.
    pub entity: String,
    /// The producer token the payload was accepted under.
    pub producer_token: String,
    /// The validated metrics tree.
    pub metrics: Map<String, Value>,
}
