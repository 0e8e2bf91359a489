//! Validation schema builder and validator.
//!
//! [`build_schema`] turns the current [`DerivedFlags`] into a [`SchemaDescriptor`]: the exact
//! set of fields on screen, each with its requiredness and value constraint. Hidden fields are
//! absent from the descriptor and therefore never validated.

use crate::allowance::{AllowanceLimits, coerce_weight, whole_pounds};
use crate::derived::DerivedFlags;
use crate::location::DUPLICATE_LOCATION_MESSAGE;
use crate::values::OrdersFormValues;
use mymove_domain::config::{DuplicateLocationPolicy, ValidationConfig};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const REQUIRED_MESSAGE: &str = "Required";
pub const WHOLE_NUMBER_MESSAGE: &str = "Enter a whole number";

/// Which orders form is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Customer orders intake.
    #[default]
    Create,
    /// Editing existing orders; requires uploaded orders documents.
    Edit,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    OrdersType,
    IssueDate,
    ReportByDate,
    HasDependents,
    NewDutyLocation,
    Grade,
    OriginDutyLocation,
    CounselingOffice,
    AccompaniedTour,
    DependentsUnderTwelve,
    DependentsTwelveAndOver,
    CivilianTdyUbAllowance,
    UploadedOrders,
}

impl Field {
    /// Required regardless of derived state.
    pub const BASE: [Self; 7] = [
        Self::OrdersType,
        Self::IssueDate,
        Self::ReportByDate,
        Self::HasDependents,
        Self::NewDutyLocation,
        Self::Grade,
        Self::OriginDutyLocation,
    ];
}

/// Value constraint attached to a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Constraint {
    /// Whole number `>= min`. Non-numeric input is an error.
    Count { min: i64 },
    /// Whole pounds within `[min, max]`. Non-numeric input reads as zero.
    Weight { min: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl FieldRule {
    const REQUIRED: Self = Self { required: true, constraint: None };
}

/// Active per-field rules. A field is on screen iff it has a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaDescriptor {
    rules: BTreeMap<Field, FieldRule>,
}

pub fn build_schema(
    derived: &DerivedFlags,
    variant: FormVariant,
    limits: AllowanceLimits,
) -> SchemaDescriptor {
    let mut rules: BTreeMap<Field, FieldRule> =
        Field::BASE.iter().map(|field| (*field, FieldRule::REQUIRED)).collect();

    if derived.counseling_office_required {
        rules.insert(Field::CounselingOffice, FieldRule::REQUIRED);
    }
    if derived.show_accompanied_tour {
        rules.insert(Field::AccompaniedTour, FieldRule::REQUIRED);
    }
    if derived.show_dependent_age_fields {
        let count = FieldRule { required: true, constraint: Some(Constraint::Count { min: 0 }) };
        rules.insert(Field::DependentsUnderTwelve, count);
        rules.insert(Field::DependentsTwelveAndOver, count);
    }
    if derived.is_civilian_tdy_move {
        rules.insert(
            Field::CivilianTdyUbAllowance,
            FieldRule {
                required: false,
                constraint: Some(Constraint::Weight { min: 0, max: limits.max }),
            },
        );
    }
    if variant == FormVariant::Edit {
        rules.insert(Field::UploadedOrders, FieldRule::REQUIRED);
    }

    SchemaDescriptor { rules }
}

impl SchemaDescriptor {
    pub fn get(&self, field: Field) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.rules.contains_key(&field)
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.get(field).is_some_and(|rule| rule.required)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.keys().copied()
    }

    /// Checks `values` against the active rules plus the cross-field checks.
    pub fn validate(
        &self,
        values: &OrdersFormValues,
        derived: &DerivedFlags,
        config: &ValidationConfig,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (field, rule) in &self.rules {
            if let Some(message) = check_field(*field, rule, values) {
                report.errors.insert(*field, message);
            }
        }

        if derived.duplicate_duty_location {
            match config.duplicate_location_policy {
                DuplicateLocationPolicy::Block => {
                    report
                        .errors
                        .entry(Field::NewDutyLocation)
                        .or_insert(Cow::Borrowed(DUPLICATE_LOCATION_MESSAGE));
                },
                DuplicateLocationPolicy::Warn => report.warnings.push(FormWarning::DuplicateDutyLocation),
            }
        }

        if self.contains(Field::CivilianTdyUbAllowance)
            && AllowanceLimits::from(config).shows_warning(coerce_weight(&values.civilian_tdy_ub_allowance))
        {
            report.warnings.push(FormWarning::UbAllowanceAboveThreshold);
        }

        report
    }
}

fn check_field(field: Field, rule: &FieldRule, values: &OrdersFormValues) -> Option<Cow<'static, str>> {
    if rule.required && !is_filled(field, values) {
        return Some(Cow::Borrowed(REQUIRED_MESSAGE));
    }

    let raw = text_of(field, values)?.trim();
    match rule.constraint? {
        Constraint::Count { min } => {
            if raw.is_empty() {
                return None;
            }
            match raw.parse::<i64>() {
                Ok(n) if n < min => Some(Cow::Owned(format!("Must be at least {min}"))),
                Ok(_) => None,
                Err(_) => Some(Cow::Borrowed(WHOLE_NUMBER_MESSAGE)),
            }
        },
        Constraint::Weight { min, max } => {
            let weight = coerce_weight(raw);
            if weight < f64::from(min) {
                Some(Cow::Owned(format!("Must be at least {min}")))
            } else if weight > f64::from(max) {
                Some(Cow::Owned(format!("Must be {max} or less")))
            } else if whole_pounds(weight).is_none() {
                Some(Cow::Borrowed(WHOLE_NUMBER_MESSAGE))
            } else {
                None
            }
        },
    }
}

fn is_filled(field: Field, values: &OrdersFormValues) -> bool {
    match field {
        Field::OrdersType => values.orders_type.is_some(),
        Field::IssueDate => values.issue_date.is_some(),
        Field::ReportByDate => values.report_by_date.is_some(),
        Field::HasDependents => values.has_dependents.is_set(),
        Field::NewDutyLocation => values.new_duty_location.is_some(),
        Field::Grade => values.grade.is_some(),
        Field::OriginDutyLocation => values.origin_duty_location.is_some(),
        Field::CounselingOffice => values.counseling_office_id.as_deref().is_some_and(|id| !id.is_empty()),
        Field::AccompaniedTour => values.accompanied_tour.is_some(),
        Field::UploadedOrders => !values.uploaded_orders.is_empty(),
        Field::DependentsUnderTwelve | Field::DependentsTwelveAndOver | Field::CivilianTdyUbAllowance => {
            text_of(field, values).is_some_and(|raw| !raw.trim().is_empty())
        },
    }
}

fn text_of(field: Field, values: &OrdersFormValues) -> Option<&str> {
    match field {
        Field::DependentsUnderTwelve => Some(&values.dependents_under_twelve),
        Field::DependentsTwelveAndOver => Some(&values.dependents_twelve_and_over),
        Field::CivilianTdyUbAllowance => Some(&values.civilian_tdy_ub_allowance),
        _ => None,
    }
}

/// Non-blocking advisory shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormWarning {
    DuplicateDutyLocation,
    UbAllowanceAboveThreshold,
}

impl FormWarning {
    pub const fn message(self) -> &'static str {
        match self {
            Self::DuplicateDutyLocation => DUPLICATE_LOCATION_MESSAGE,
            Self::UbAllowanceAboveThreshold => crate::allowance::UB_ALLOWANCE_WARNING,
        }
    }
}

/// Field errors block submission; warnings never do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<Field, Cow<'static, str>>,
    pub warnings: Vec<FormWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(AsRef::as_ref)
    }

    pub fn has_warning(&self, warning: FormWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{FieldGroup, Visibility};
    use strum::IntoEnumIterator;

    fn civilian_tdy() -> DerivedFlags {
        DerivedFlags { is_oconus_move: true, is_civilian_tdy_move: true, ..DerivedFlags::default() }
    }

    fn values_with_ub(raw: &str) -> OrdersFormValues {
        OrdersFormValues { civilian_tdy_ub_allowance: raw.into(), ..OrdersFormValues::default() }
    }

    #[test]
    fn base_fields_are_always_required() {
        let schema = build_schema(&DerivedFlags::default(), FormVariant::Create, AllowanceLimits::default());

        for field in Field::BASE {
            assert!(schema.is_required(field), "{field} should be required");
        }
        assert_eq!(schema.fields().count(), Field::BASE.len());
    }

    #[test]
    fn visible_groups_are_in_schema_and_hidden_groups_are_not() {
        let derived = DerivedFlags {
            show_accompanied_tour: true,
            show_dependent_age_fields: true,
            counseling_office_required: true,
            ..DerivedFlags::default()
        };
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());

        for group in FieldGroup::iter() {
            let in_schema = match group {
                FieldGroup::AccompaniedTour => schema.contains(Field::AccompaniedTour),
                FieldGroup::DependentAges => {
                    schema.contains(Field::DependentsUnderTwelve)
                        && schema.contains(Field::DependentsTwelveAndOver)
                },
                FieldGroup::CivilianTdyUbAllowance => schema.contains(Field::CivilianTdyUbAllowance),
                FieldGroup::CounselingOffice => schema.is_required(Field::CounselingOffice),
            };
            assert_eq!(in_schema, derived.visibility(group) == Visibility::Visible, "{group}");
        }
    }

    #[test]
    fn edit_variant_requires_uploaded_orders() {
        let schema = build_schema(&DerivedFlags::default(), FormVariant::Edit, AllowanceLimits::default());
        let report = schema.validate(&OrdersFormValues::default(), &DerivedFlags::default(), &ValidationConfig::default());

        assert_eq!(report.error(Field::UploadedOrders), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn ub_allowance_bounds_and_warning() {
        let derived = civilian_tdy();
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());
        let config = ValidationConfig::default();
        assert!(!schema.is_required(Field::CivilianTdyUbAllowance));

        let at_threshold = schema.validate(&values_with_ub("350"), &derived, &config);
        assert!(at_threshold.error(Field::CivilianTdyUbAllowance).is_none());
        assert!(!at_threshold.has_warning(FormWarning::UbAllowanceAboveThreshold));

        let above = schema.validate(&values_with_ub("351"), &derived, &config);
        assert!(above.error(Field::CivilianTdyUbAllowance).is_none());
        assert!(above.has_warning(FormWarning::UbAllowanceAboveThreshold));

        let too_high = schema.validate(&values_with_ub("2001"), &derived, &config);
        assert_eq!(too_high.error(Field::CivilianTdyUbAllowance), Some("Must be 2000 or less"));
        assert!(!too_high.has_warning(FormWarning::UbAllowanceAboveThreshold));

        let negative = schema.validate(&values_with_ub("-1"), &derived, &config);
        assert_eq!(negative.error(Field::CivilianTdyUbAllowance), Some("Must be at least 0"));

        let junk = schema.validate(&values_with_ub("lots"), &derived, &config);
        assert!(junk.error(Field::CivilianTdyUbAllowance).is_none());
    }

    #[test]
    fn ub_allowance_bound_applies_to_every_numeric_form() {
        let derived = civilian_tdy();
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());
        let config = ValidationConfig::default();

        for raw in ["2000.5", "1e5", "99999999999999999999"] {
            let report = schema.validate(&values_with_ub(raw), &derived, &config);
            assert_eq!(report.error(Field::CivilianTdyUbAllowance), Some("Must be 2000 or less"), "{raw}");
            assert!(!report.has_warning(FormWarning::UbAllowanceAboveThreshold), "{raw}");
        }

        let fraction = schema.validate(&values_with_ub("500.5"), &derived, &config);
        assert_eq!(fraction.error(Field::CivilianTdyUbAllowance), Some(WHOLE_NUMBER_MESSAGE));
        assert!(fraction.has_warning(FormWarning::UbAllowanceAboveThreshold));

        let exponent = schema.validate(&values_with_ub("1.5e3"), &derived, &config);
        assert!(exponent.error(Field::CivilianTdyUbAllowance).is_none());
    }

    #[test]
    fn ub_allowance_is_unchecked_when_hidden() {
        let derived = DerivedFlags::default();
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());
        let report = schema.validate(&values_with_ub("999999"), &derived, &ValidationConfig::default());

        assert!(report.error(Field::CivilianTdyUbAllowance).is_none());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn dependent_counts_must_be_whole_and_non_negative() {
        let derived = DerivedFlags { show_dependent_age_fields: true, ..DerivedFlags::default() };
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());
        let values = OrdersFormValues {
            dependents_under_twelve: "two".into(),
            dependents_twelve_and_over: "-1".into(),
            ..OrdersFormValues::default()
        };

        let report = schema.validate(&values, &derived, &ValidationConfig::default());
        assert_eq!(report.error(Field::DependentsUnderTwelve), Some(WHOLE_NUMBER_MESSAGE));
        assert_eq!(report.error(Field::DependentsTwelveAndOver), Some("Must be at least 0"));

        let empty = schema.validate(&OrdersFormValues::default(), &derived, &ValidationConfig::default());
        assert_eq!(empty.error(Field::DependentsUnderTwelve), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn duplicate_policy_decides_error_or_warning() {
        let derived = DerivedFlags { duplicate_duty_location: true, ..DerivedFlags::default() };
        let schema = build_schema(&derived, FormVariant::Create, AllowanceLimits::default());
        let values = OrdersFormValues::default();

        let mut config = ValidationConfig::default();
        let blocked = schema.validate(&values, &derived, &config);
        // The missing location is reported first.
        assert_eq!(blocked.error(Field::NewDutyLocation), Some(REQUIRED_MESSAGE));

        config.duplicate_location_policy = DuplicateLocationPolicy::Warn;
        let warned = schema.validate(&values, &derived, &config);
        assert!(warned.has_warning(FormWarning::DuplicateDutyLocation));
    }
}
