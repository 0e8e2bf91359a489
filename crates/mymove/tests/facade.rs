use mymove::domain::config::DuplicateLocationPolicy;
use mymove::features::orders::{FormVariant, OrdersForm, OrdersFormValues};
use mymove::{features, load_intake_config};
use std::io::Write;

#[test]
fn test_orders_slice_is_registered() {
    assert!(features::is_enabled("orders"));
    assert!(!features::is_enabled("billing"));
}

#[test]
fn test_config_file_reaches_the_form() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[validation]\nduplicate_location_policy = \"warn\"\n").unwrap();

    let config = load_intake_config(Some(file.path())).unwrap();
    assert_eq!(config.validation.duplicate_location_policy, DuplicateLocationPolicy::Warn);

    let form = OrdersForm::new(config, FormVariant::Create, Default::default(), OrdersFormValues::default());
    assert!(!form.is_submit_enabled());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = load_intake_config(Some(std::path::Path::new("/nonexistent/intake.toml"))).unwrap_err();
    assert_eq!(err.kind(), "Config");
}
