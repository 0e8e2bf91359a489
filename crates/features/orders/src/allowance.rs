//! Unaccompanied baggage (UB) allowance rules.
//!
//! Two concerns live here: the civilian TDY allowance field (when it shows, how its raw input
//! is read, when the advisory banner appears) and the estimate of the UB entitlement for the
//! cases that do not need the branch/grade table.

use mymove_domain::config::ValidationConfig;
use mymove_domain::orders::{Affiliation, OrdersType, PayGrade};
use serde::Serialize;

pub const STUDENT_TRAVEL_UB_ALLOWANCE: u32 = 350;
pub const CIVILIAN_BASE_UB_ALLOWANCE: u32 = 350;
pub const DEPENDENT_TWELVE_AND_OVER_UB_ALLOWANCE: u32 = 350;
pub const DEPENDENT_UNDER_TWELVE_UB_ALLOWANCE: u32 = 175;
pub const MAX_FAMILY_CIVILIAN_UB_ALLOWANCE: u32 = 2000;

pub const UB_ALLOWANCE_WARNING: &str = "The weight entered is above the standard civilian UB allowance. \
     Confirm the amount authorized on your orders.";

/// Bounds for the civilian TDY UB allowance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceLimits {
    pub max: u32,
    pub warning_threshold: u32,
}

impl Default for AllowanceLimits {
    fn default() -> Self {
        Self::from(&ValidationConfig::default())
    }
}

impl From<&ValidationConfig> for AllowanceLimits {
    fn from(config: &ValidationConfig) -> Self {
        Self { max: config.ub_allowance_max, warning_threshold: config.ub_warning_threshold }
    }
}

impl AllowanceLimits {
    /// Advisory only: `threshold < weight <= max`.
    pub fn shows_warning(self, weight: f64) -> bool {
        weight > f64::from(self.warning_threshold) && weight <= f64::from(self.max)
    }
}

pub fn is_civilian_tdy_move(
    orders_type: Option<OrdersType>,
    pay_grade: Option<PayGrade>,
    is_oconus_move: bool,
    ub_enabled: bool,
) -> bool {
    ub_enabled
        && is_oconus_move
        && orders_type == Some(OrdersType::TemporaryDuty)
        && pay_grade.is_some_and(PayGrade::is_civilian)
}

/// Reads a weight field. Non-numeric (or non-finite) input counts as zero; any other number is
/// kept as typed, fractions and exponents included, so the bound check sees the real value.
pub fn coerce_weight(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|w| w.is_finite()).unwrap_or(0.0)
}

/// A coerced weight as whole pounds, or `None` when it is fractional or outside `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_pounds(weight: f64) -> Option<u32> {
    (weight.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&weight)).then(|| weight as u32)
}

/// Inputs to [`estimate_ub_allowance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UbEstimateInput {
    pub affiliation: Option<Affiliation>,
    pub pay_grade: Option<PayGrade>,
    pub orders_type: Option<OrdersType>,
    pub is_oconus_move: bool,
    pub dependents_authorized: bool,
    pub accompanied_tour: bool,
    pub dependents_under_twelve: u32,
    pub dependents_twelve_and_over: u32,
}

/// Result of the UB entitlement estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UbEstimate {
    Pounds { pounds: u32 },
    /// The allowance comes from the branch/grade table, keyed by these normalized values.
    NeedsLookup { key: UbLookupKey },
}

/// Normalized key into the branch/grade UB allowance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UbLookupKey {
    pub affiliation: Option<Affiliation>,
    pub pay_grade: Option<PayGrade>,
    pub orders_type: OrdersType,
    pub dependents_authorized: bool,
    pub accompanied_tour: bool,
}

pub fn estimate_ub_allowance(input: &UbEstimateInput) -> UbEstimate {
    if !input.is_oconus_move {
        return UbEstimate::Pounds { pounds: 0 };
    }
    if input.orders_type == Some(OrdersType::StudentTravel) {
        return UbEstimate::Pounds { pounds: STUDENT_TRAVEL_UB_ALLOWANCE };
    }

    let civilian = input.pay_grade.is_some_and(PayGrade::is_civilian);
    if civilian && input.dependents_authorized {
        let pounds = CIVILIAN_BASE_UB_ALLOWANCE
            .saturating_add(
                input.dependents_twelve_and_over.saturating_mul(DEPENDENT_TWELVE_AND_OVER_UB_ALLOWANCE),
            )
            .saturating_add(input.dependents_under_twelve.saturating_mul(DEPENDENT_UNDER_TWELVE_UB_ALLOWANCE))
            .min(MAX_FAMILY_CIVILIAN_UB_ALLOWANCE);
        return UbEstimate::Pounds { pounds };
    }

    let orders_type = match input.orders_type {
        Some(OrdersType::LocalMove) => return UbEstimate::Pounds { pounds: 0 },
        Some(OrdersType::TemporaryDuty) => OrdersType::TemporaryDuty,
        _ => OrdersType::PermanentChangeOfStation,
    };
    let affiliation = match input.affiliation {
        Some(Affiliation::SpaceForce) => Some(Affiliation::AirForce),
        other => other,
    };
    let pay_grade = match input.pay_grade {
        Some(PayGrade::E9SpecialSeniorEnlisted) => Some(PayGrade::E9),
        other => other,
    };

    UbEstimate::NeedsLookup {
        key: UbLookupKey {
            affiliation,
            pay_grade,
            orders_type,
            dependents_authorized: input.dependents_authorized,
            accompanied_tour: input.accompanied_tour,
        },
    }
}
