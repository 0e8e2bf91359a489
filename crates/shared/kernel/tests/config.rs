use mymove_kernel::config::{ConfigError, load_config, load_config_with_env};
use mymove_kernel::domain::config::{DuplicateLocationPolicy, IntakeConfig};
use std::collections::HashMap;
use std::io::Write;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_file_over_defaults() {
    let file = write_toml(
        r#"
        [validation]
        duplicate_location_policy = "warn"
        ub_warning_threshold = 400

        [search]
        min_query_length = 3
        "#,
    );

    let cfg: IntakeConfig = load_config(Some(file.path())).expect("config should load");
    assert_eq!(cfg.validation.duplicate_location_policy, DuplicateLocationPolicy::Warn);
    assert_eq!(cfg.validation.ub_warning_threshold, 400);
    assert_eq!(cfg.validation.ub_allowance_max, 2000);
    assert_eq!(cfg.search.min_query_length, 3);
}

#[test]
fn environment_overrides_file_values() {
    let file = write_toml("[search]\nmin_query_length = 3\n");
    let vars = HashMap::from([
        ("MYMOVE__SEARCH__MIN_QUERY_LENGTH".to_owned(), "5".to_owned()),
        ("MYMOVE__FLAGS__ALASKA".to_owned(), "alaska_rollout".to_owned()),
    ]);

    let cfg: IntakeConfig = load_config_with_env(Some(file.path()), vars).expect("config");
    assert_eq!(cfg.search.min_query_length, 5);
    assert_eq!(cfg.flags.alaska, "alaska_rollout");
}

#[test]
fn no_file_yields_defaults() {
    let cfg: IntakeConfig =
        load_config_with_env(None::<&str>, HashMap::new()).expect("defaults should load");
    assert_eq!(cfg.validation.ub_allowance_max, 2000);
    assert_eq!(cfg.flags.unaccompanied_baggage, "unaccompanied_baggage");
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config::<IntakeConfig>(Some("/definitely/not/here/intake.toml"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert_eq!(err.kind(), "Config");
}
