//! # Configuration & Payload Loading
//!
//! Deserialization entry points for the two documents the validator
//! consumes: producer configurations (JSON bytes, JSON files, or YAML files)
//! and payloads (JSON bytes, with the producer token attached after
//! deserialization).
//!
//! The intake service and its tools share this one path from bytes to typed
//! records; validation itself never touches a file.

use std::path::Path;

use thiserror::Error;

use feedgate_core::{Payload, ProducerConfig};

/// Errors produced while loading a configuration or payload document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document was not valid JSON, or did not fit the target record.
    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document was not valid YAML, or did not fit the target record.
    #[error("failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a producer configuration from JSON bytes.
pub fn producer_config_from_slice(bytes: &[u8]) -> Result<ProducerConfig, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load a producer configuration from a JSON file.
pub fn producer_config_from_json_file(
    path: impl AsRef<Path>,
) -> Result<ProducerConfig, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    producer_config_from_slice(&content)
}

/// Load a producer configuration from a YAML file.
pub fn producer_config_from_yaml_file(
    path: impl AsRef<Path>,
) -> Result<ProducerConfig, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load a payload from JSON bytes and attach the producer token the intake
/// layer resolved the configuration from.
///
/// The token is never read from the wire; whatever a producer puts in a
/// `producer_token` field is ignored.
pub fn payload_from_slice(token: &str, bytes: &[u8]) -> Result<Payload, LoadError> {
    let payload: Payload = serde_json::from_slice(bytes)?;
    Ok(payload.with_producer_token(token))
}
