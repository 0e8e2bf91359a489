use mymove_domain::config::{DuplicateLocationPolicy, IntakeConfig, SearchConfig, ValidationConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let validation = ValidationConfig::default();
    assert_eq!(validation.ub_allowance_max, 2000);
    assert_eq!(validation.ub_warning_threshold, 350);
    assert_eq!(validation.duplicate_location_policy, DuplicateLocationPolicy::Block);

    assert_eq!(SearchConfig::default().min_query_length, 2);

    let cfg = IntakeConfig::default();
    assert_eq!(cfg.flags.unaccompanied_baggage, "unaccompanied_baggage");
    assert_eq!(cfg.flags.alaska, "enable_alaska");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn intake_config_deserializes_partial_sections() {
    let raw = json!({
        "flags": { "alaska": "alaska_v2" },
        "validation": { "duplicate_location_policy": "warn" },
        "logging": { "json": true, "directory": "/tmp/logs" }
    });

    let cfg: IntakeConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.flags.alaska, "alaska_v2");
    assert_eq!(cfg.flags.unaccompanied_baggage, "unaccompanied_baggage");
    assert_eq!(cfg.validation.duplicate_location_policy, DuplicateLocationPolicy::Warn);
    assert_eq!(cfg.validation.ub_allowance_max, 2000);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn cloned_config_is_copy_on_write() {
    let base = IntakeConfig::default();
    let mut tuned = base.clone();
    tuned.validation.ub_warning_threshold = 500;

    assert_eq!(base.validation.ub_warning_threshold, 350);
    assert_eq!(tuned.validation.ub_warning_threshold, 500);
}
