//! Derived flags: the single pure pipeline from form values to field visibility.

use crate::allowance::is_civilian_tdy_move;
use crate::location::classify;
use crate::tour::{derive_tour_fields, is_dependents_locked};
use crate::values::OrdersFormValues;
use mymove_domain::features::FeatureFlagSet;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Booleans computed from the current values and flags. Never stored as a source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFlags {
    pub is_oconus_move: bool,
    pub show_accompanied_tour: bool,
    pub show_dependent_age_fields: bool,
    pub is_civilian_tdy_move: bool,
    pub has_dependents_disabled: bool,
    pub counseling_office_required: bool,
    pub duplicate_duty_location: bool,
}

impl DerivedFlags {
    /// Classifier, then tour rules, then the civilian TDY rule.
    pub fn derive(values: &OrdersFormValues, flags: FeatureFlagSet) -> Self {
        let location = classify(values.origin_duty_location.as_ref(), values.new_duty_location.as_ref());
        let ub_enabled = flags.ub_enabled();

        let tour = derive_tour_fields(
            values.orders_type,
            location.is_oconus_move,
            values.has_dependents,
            ub_enabled,
        );

        Self {
            is_oconus_move: location.is_oconus_move,
            show_accompanied_tour: tour.show_accompanied_tour,
            show_dependent_age_fields: tour.show_dependent_age_fields,
            is_civilian_tdy_move: is_civilian_tdy_move(
                values.orders_type,
                values.grade,
                location.is_oconus_move,
                ub_enabled,
            ),
            has_dependents_disabled: is_dependents_locked(values.orders_type),
            counseling_office_required: location.origin_provides_counseling,
            duplicate_duty_location: location.duplicate,
        }
    }

    pub const fn visibility(&self, group: FieldGroup) -> Visibility {
        let visible = match group {
            FieldGroup::AccompaniedTour => self.show_accompanied_tour,
            FieldGroup::DependentAges => self.show_dependent_age_fields,
            FieldGroup::CivilianTdyUbAllowance => self.is_civilian_tdy_move,
            FieldGroup::CounselingOffice => self.counseling_office_required,
        };
        if visible { Visibility::Visible } else { Visibility::Hidden }
    }
}

/// Conditionally rendered field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldGroup {
    AccompaniedTour,
    DependentAges,
    CivilianTdyUbAllowance,
    CounselingOffice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
