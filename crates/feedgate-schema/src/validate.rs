//! # Validation Orchestrator
//!
//! Sequences the envelope checks (identity, metrics block, entity, status)
//! and the metric-content checks (mandatory fields, tree match) into one
//! pass/fail decision, short-circuiting on the first failure.
//!
//! The orchestrator never mutates the caller's payload; on acceptance it
//! returns a fresh [`AcceptedPayload`] with the accepted fields copied over.
//! Rejections are logged through `tracing` with the payload's identifying
//! fields; nothing here installs a subscriber — that belongs to the
//! embedding service.

use thiserror::Error;
use tracing::{debug, warn};

use feedgate_core::{AcceptedPayload, Payload, ProducerConfig, ValidationError};

use crate::flatten::flatten_metrics;
use crate::loader::{payload_from_slice, LoadError};
use crate::mandatory::check_mandatory_fields;
use crate::matcher::{TreeMatcher, DEFAULT_MAX_DEPTH};

/// A failure of the byte-level intake entry: either the payload could not be
/// loaded at all, or it loaded and was rejected by validation.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The payload bytes could not be deserialized.
    #[error("payload load error: {0}")]
    Load(#[from] LoadError),

    /// The payload was rejected by validation.
    #[error("payload validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// The validation orchestrator.
///
/// Stateless apart from the configured depth bound; one validator may serve
/// any number of concurrent validations against shared configurations.
#[derive(Debug, Clone, Copy)]
pub struct PayloadValidator {
    max_depth: usize,
}

impl Default for PayloadValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadValidator {
    /// A validator with the default depth bound.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the metrics-tree depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate a payload against a producer configuration.
    ///
    /// Checks run in order and the first failure wins: identity, metrics
    /// block, entity, status, mandatory fields, tree match. When the
    /// configuration sets `skip_validation`, the metric-content checks are
    /// bypassed; the envelope checks still apply.
    pub fn validate(
        &self,
        payload: &Payload,
        config: &ProducerConfig,
    ) -> Result<AcceptedPayload, ValidationError> {
        if payload.id.is_empty() && payload.entity.is_empty() {
            warn!(token = %payload.producer_token, "rejecting payload: missing id and entity");
            return Err(ValidationError::MissingIdentity);
        }
        if payload.id.is_empty() {
            warn!(entity = %payload.entity, "rejecting payload: missing id");
            return Err(ValidationError::MissingId);
        }
        if payload.entity.is_empty() {
            warn!(id = %payload.id, "rejecting payload: missing entity");
            return Err(ValidationError::MissingEntity);
        }

        // An absent (or null) metrics block is a producer mistake; an empty
        // map is the supported way to post nothing.
        let Some(metrics) = payload.metrics.as_ref() else {
            warn!(id = %payload.id, entity = %payload.entity, "rejecting payload: metrics block absent");
            return Err(ValidationError::MissingMetricsBlock);
        };

        if !config.entity_matches(&payload.entity) {
            warn!(
                id = %payload.id,
                entity = %payload.entity,
                config_entity = %config.entity,
                token = %payload.producer_token,
                "rejecting payload: entity does not match producer configuration"
            );
            return Err(ValidationError::UnauthorizedEntity {
                payload_entity: payload.entity.clone(),
                config_entity: config.entity.clone(),
            });
        }

        if !config.is_enabled() {
            warn!(
                id = %payload.id,
                entity = %payload.entity,
                status = %config.status,
                token = %payload.producer_token,
                "rejecting payload: producer not enabled"
            );
            return Err(ValidationError::ProducerDisabled {
                status: config.status.clone(),
            });
        }

        if config.skip_validation {
            debug!(id = %payload.id, "skip_validation set; bypassing metric content checks");
        } else {
            if let Some(required) = config.mandatory_fields.as_deref() {
                let flattened = flatten_metrics(metrics);
                if let Err(err) = check_mandatory_fields(required, &flattened) {
                    warn!(
                        id = %payload.id,
                        entity = %payload.entity,
                        error = %err,
                        "rejecting payload: missing mandatory fields"
                    );
                    return Err(err);
                }
            }

            let matcher = TreeMatcher::with_max_depth(self.max_depth);
            if let Err(err) = matcher.check(metrics, &config.allowed_metrics) {
                warn!(
                    id = %payload.id,
                    entity = %payload.entity,
                    error = %err,
                    "rejecting payload: metrics do not match producer configuration"
                );
                return Err(err);
            }
        }

        debug!(id = %payload.id, entity = %payload.entity, "payload accepted");
        Ok(AcceptedPayload {
            id: payload.id.clone(),
            entity: payload.entity.clone(),
            producer_token: payload.producer_token.clone(),
            metrics: metrics.clone(),
        })
    }
}

/// Validate a payload with the default depth bound.
pub fn validate_payload(
    payload: &Payload,
    config: &ProducerConfig,
) -> Result<AcceptedPayload, ValidationError> {
    PayloadValidator::new().validate(payload, config)
}

/// The byte-level intake entry: deserialize a payload, attach the producer
/// token, and validate against the configuration.
pub fn validate_payload_bytes(
    token: &str,
    payload_bytes: &[u8],
    config: &ProducerConfig,
) -> Result<AcceptedPayload, IngestError> {
    let payload = payload_from_slice(token, payload_bytes)?;
    Ok(PayloadValidator::new().validate(&payload, config)?)
}
