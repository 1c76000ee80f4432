#![deny(missing_docs)]

//! # feedgate-core — Foundational Types for Feedgate
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Untyped metric trees.** Submitted metrics and the allowed-metrics
//!    schema are dynamically shaped; both are carried as
//!    `serde_json::Map<String, Value>` and interpreted structurally at
//!    validation time, never coerced into rigid structs.
//!
//! 2. **[`MetricPath`] is the sole path representation.** Validation descent,
//!    error reporting, and mandatory-field bookkeeping all speak the same
//!    dotted-path newtype.
//!
//! 3. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests. Every rejection is
//!    request-level, never process-fatal.
//!
//! 4. **Configuration is read-only at validation time.** A [`ProducerConfig`]
//!    is loaded once and shared by reference across any number of concurrent
//!    validations; nothing in this crate mutates it.

pub mod config;
pub mod error;
pub mod path;
pub mod payload;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{FlowConfig, Outputs, ProducerConfig, S3Export};
pub use error::ValidationError;
pub use path::MetricPath;
pub use payload::{AcceptedPayload, Payload};
