use mymove_domain::features::FeatureFlagSet;
use mymove_domain::location::DutyLocationRef;
use mymove_domain::orders::{Affiliation, DependentsAnswer, OrdersType, PayGrade};
use serde_json::json;
use std::str::FromStr;

#[test]
fn orders_types_use_wire_names() {
    assert_eq!(OrdersType::PermanentChangeOfStation.to_string(), "PERMANENT_CHANGE_OF_STATION");
    assert_eq!(OrdersType::from_str("STUDENT_TRAVEL"), Ok(OrdersType::StudentTravel));
    assert_eq!(json!(OrdersType::EarlyReturnOfDependents), json!("EARLY_RETURN_OF_DEPENDENTS"));
    assert_eq!(OrdersType::TemporaryDuty.label(), "Temporary Duty (TDY)");
}

#[test]
fn only_student_travel_and_early_return_lock_dependents() {
    let locked: Vec<_> = [
        OrdersType::PermanentChangeOfStation,
        OrdersType::LocalMove,
        OrdersType::Retirement,
        OrdersType::Separation,
        OrdersType::TemporaryDuty,
        OrdersType::EarlyReturnOfDependents,
        OrdersType::StudentTravel,
    ]
    .into_iter()
    .filter(|t| t.locks_dependents())
    .collect();

    assert_eq!(locked, vec![OrdersType::EarlyReturnOfDependents, OrdersType::StudentTravel]);
}

#[test]
fn pay_grades_round_trip_underscored_names() {
    assert_eq!(PayGrade::from_str("E_9_SPECIAL_SENIOR_ENLISTED"), Ok(PayGrade::E9SpecialSeniorEnlisted));
    assert_eq!(PayGrade::CivilianEmployee.to_string(), "CIVILIAN_EMPLOYEE");
    let grade: PayGrade = serde_json::from_value(json!("O_1_ACADEMY_GRADUATE")).expect("grade");
    assert_eq!(grade, PayGrade::O1AcademyGraduate);
    assert_eq!(grade.label(), "O-1 or Service Academy Graduate");
}

#[test]
fn affiliation_parses_case_insensitively() {
    assert_eq!(Affiliation::from_str("air_force"), Ok(Affiliation::AirForce));
    assert_eq!(Affiliation::Marines.label(), "Marine Corps");
}

#[test]
fn dependents_answer_defaults_to_unset() {
    assert_eq!(DependentsAnswer::default(), DependentsAnswer::Unset);
    assert_eq!(DependentsAnswer::from(Some(false)), DependentsAnswer::No);
    assert_eq!(DependentsAnswer::Yes.as_bool(), Some(true));
    assert!(!DependentsAnswer::Unset.is_set());
}

#[test]
fn duty_location_without_oconus_marker_is_conus() {
    let loc: DutyLocationRef = serde_json::from_value(json!({
        "id": "f9299768",
        "name": "Yuma AFB",
        "address": { "city": "Yuma", "state": "AZ", "postalCode": "85364" }
    }))
    .expect("duty location");

    assert!(!loc.is_oconus());
    assert!(!loc.provides_services_counseling);
}

#[test]
fn flag_set_maps_keys() {
    assert_eq!(FeatureFlagSet::from("unaccompanied_baggage"), FeatureFlagSet::UNACCOMPANIED_BAGGAGE);
    assert!(FeatureFlagSet::from("*").alaska_enabled());
    assert!(FeatureFlagSet::from("unknown").is_empty());
}
