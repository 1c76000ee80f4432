//! End-to-end intake flow: configuration file → loader → orchestrator,
//! exercising the full check sequence the way the intake service does.

use std::io::Write;

use feedgate_core::{MetricPath, ValidationError};
use feedgate_schema::{
    producer_config_from_json_file, producer_config_from_yaml_file, validate_payload_bytes,
    IngestError,
};

/// A realistic producer configuration covering nested groups, every leaf
/// type family, mandatory fields, and flow routing.
const SHIPMENTS_CONFIG: &str = r#"{
    "id": "cfg-shipments-01",
    "producer_name": "shipments-batch",
    "entity": "shipments",
    "status": "enabled",
    "allow_get": false,
    "skip_validation": false,
    "allowed_metrics": {
        "delivery": {
            "total": "number",
            "on_time": "boolean_number",
            "first_attempt": {
                "date": "date",
                "time": "time"
            }
        },
        "last_event_at": "datetime",
        "fragile": "bool",
        "carriers": "array",
        "notes": "string"
    },
    "flow_config": {
        "queue_topic": "metrics.shipments",
        "outputs": { "index_names": ["shipments-idx"] }
    },
    "mandatory_fields": ["delivery.total"],
    "created_at": "2025-11-02T09:00:00Z",
    "created_by": "ops"
}"#;

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn a_fully_populated_payload_is_accepted() {
    let file = config_file(SHIPMENTS_CONFIG);
    let config = producer_config_from_json_file(file.path()).expect("config loads");

    let accepted = validate_payload_bytes(
        "tok-batch",
        br#"{
            "id": "SHP-0001",
            "entity": "shipments",
            "metrics": {
                "delivery": {
                    "total": 128,
                    "on_time": 1,
                    "first_attempt": { "date": "2026-08-01", "time": "09:15:00" }
                },
                "last_event_at": "2026-08-01T09:15:00Z",
                "fragile": false,
                "carriers": ["north", "express"],
                "notes": "reprocessed batch"
            }
        }"#,
        &config,
    )
    .expect("payload must pass every check");

    assert_eq!(accepted.id, "SHP-0001");
    assert_eq!(accepted.producer_token, "tok-batch");
    assert!(accepted.metrics.contains_key("delivery"));
}

#[test]
fn a_type_mismatch_reports_the_exact_dotted_path() {
    let file = config_file(SHIPMENTS_CONFIG);
    let config = producer_config_from_json_file(file.path()).expect("config loads");

    let err = validate_payload_bytes(
        "tok-batch",
        br#"{
            "id": "SHP-0002",
            "entity": "shipments",
            "metrics": {
                "delivery": { "total": 3, "first_attempt": { "date": "tomorrow" } }
            }
        }"#,
        &config,
    )
    .unwrap_err();

    match err {
        IngestError::Validation(ValidationError::MetricTypeMismatch { path, field, .. }) => {
            assert_eq!(path.dotted(), "delivery.first_attempt.date");
            assert_eq!(field, "date");
        }
        other => panic!("expected a type mismatch, got: {other}"),
    }
}

#[test]
fn an_unknown_metric_reports_an_invalid_path() {
    let file = config_file(SHIPMENTS_CONFIG);
    let config = producer_config_from_json_file(file.path()).expect("config loads");

    let err = validate_payload_bytes(
        "tok-batch",
        br#"{
            "id": "SHP-0003",
            "entity": "shipments",
            "metrics": { "delivery": { "total": 3, "weight": 12 } }
        }"#,
        &config,
    )
    .unwrap_err();

    match err {
        IngestError::Validation(err) => {
            assert!(matches!(err, ValidationError::InvalidMetricPath { .. }));
            assert_eq!(
                err.path().map(MetricPath::dotted),
                Some("delivery.weight".to_string())
            );
        }
        other => panic!("expected a validation rejection, got: {other}"),
    }
}

#[test]
fn missing_mandatory_fields_are_rejected_even_when_all_paths_are_legal() {
    let file = config_file(SHIPMENTS_CONFIG);
    let config = producer_config_from_json_file(file.path()).expect("config loads");

    let err = validate_payload_bytes(
        "tok-batch",
        br#"{
            "id": "SHP-0004",
            "entity": "shipments",
            "metrics": { "notes": "no totals this run" }
        }"#,
        &config,
    )
    .unwrap_err();

    match err {
        IngestError::Validation(ValidationError::MissingMandatoryField { path }) => {
            assert_eq!(path.dotted(), "delivery.total");
        }
        other => panic!("expected a mandatory-field rejection, got: {other}"),
    }
}

#[test]
fn envelope_rejections_fire_before_metric_checks() {
    let file = config_file(SHIPMENTS_CONFIG);
    let mut config = producer_config_from_json_file(file.path()).expect("config loads");

    // Wrong entity: rejected before mandatory/tree checks ever run.
    let err = validate_payload_bytes(
        "tok-batch",
        br#"{ "id": "SHP-0005", "entity": "orders", "metrics": { "bogus": 1 } }"#,
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        IngestError::Validation(ValidationError::UnauthorizedEntity { .. })
    ));

    // Disabled producer: same payload, different rejection.
    config.status = "disabled".to_string();
    let err = validate_payload_bytes(
        "tok-batch",
        br#"{ "id": "SHP-0005", "entity": "shipments", "metrics": { "bogus": 1 } }"#,
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        IngestError::Validation(ValidationError::ProducerDisabled { .. })
    ));
}

#[test]
fn yaml_configurations_load_and_validate_identically() {
    let file = config_file(concat!(
        "entity: shipments\n",
        "status: ENABLED\n",
        "allowed_metrics:\n",
        "  delivery:\n",
        "    total: number\n",
    ));
    let config = producer_config_from_yaml_file(file.path()).expect("yaml config loads");

    let accepted = validate_payload_bytes(
        "tok-yaml",
        br#"{ "id": "SHP-0006", "entity": "Shipments", "metrics": { "delivery": { "total": 1 } } }"#,
        &config,
    )
    .expect("status and entity comparisons ignore case");
    assert_eq!(accepted.entity, "Shipments");
}

#[test]
fn malformed_payload_bytes_are_a_load_error_not_a_rejection() {
    let file = config_file(SHIPMENTS_CONFIG);
    let config = producer_config_from_json_file(file.path()).expect("config loads");

    let err = validate_payload_bytes("tok-batch", b"{ truncated", &config).unwrap_err();
    assert!(matches!(err, IngestError::Load(_)));
}
