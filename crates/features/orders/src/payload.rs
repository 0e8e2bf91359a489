//! Tagged submission payloads.
//!
//! One variant per orders type, so the set of legal fields is checked by the compiler: locked
//! orders types have no `has_dependents` field at all, and only temporary duty can carry a
//! civilian UB allowance.

use crate::allowance::{coerce_weight, whole_pounds};
use crate::derived::DerivedFlags;
use crate::error::{OrdersError, OrdersErrorExt};
use crate::values::OrdersFormValues;
use chrono::NaiveDate;
use mymove_domain::orders::{OrdersType, PayGrade};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPayload {
    pub issue_date: NaiveDate,
    pub report_by_date: NaiveDate,
    pub grade: PayGrade,
    pub origin_duty_location_id: String,
    pub new_duty_location_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counseling_office_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uploaded_orders: Vec<String>,
    #[serde(flatten)]
    pub orders: OrdersDetails,
}

/// Orders-type specific part of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ordersType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdersDetails {
    PermanentChangeOfStation(DependentsDetails),
    LocalMove(DependentsDetails),
    Retirement(DependentsDetails),
    Separation(DependentsDetails),
    TemporaryDuty(TemporaryDutyDetails),
    EarlyReturnOfDependents(LockedDependentsDetails),
    StudentTravel(LockedDependentsDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentsDetails {
    pub has_dependents: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oconus: Option<OconusEntitlement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryDutyDetails {
    pub has_dependents: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oconus: Option<OconusEntitlement>,
    /// Present only for civilian TDY moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civilian_tdy_ub_allowance: Option<u32>,
}

/// Dependents are implied by the orders type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedDependentsDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oconus: Option<OconusEntitlement>,
}

/// Accompanied tour and dependent ages, sent only when those fields are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OconusEntitlement {
    pub accompanied_tour: bool,
    pub dependents_under_twelve: u32,
    pub dependents_twelve_and_over: u32,
}

impl OrdersPayload {
    /// Builds the payload from values that already passed validation.
    ///
    /// Only fields that are currently visible are read; hidden groups never leak into the
    /// payload even if they still hold values.
    ///
    /// # Errors
    /// [`OrdersError::Validation`] if a required value is missing or malformed.
    pub fn from_values(values: &OrdersFormValues, derived: &DerivedFlags) -> Result<Self, OrdersError> {
        let orders_type = required(values.orders_type, "ordersType")?;
        let oconus = oconus_entitlement(values, derived)?;

        let orders = match orders_type {
            OrdersType::EarlyReturnOfDependents => {
                OrdersDetails::EarlyReturnOfDependents(LockedDependentsDetails { oconus })
            },
            OrdersType::StudentTravel => OrdersDetails::StudentTravel(LockedDependentsDetails { oconus }),
            OrdersType::TemporaryDuty => OrdersDetails::TemporaryDuty(TemporaryDutyDetails {
                has_dependents: has_dependents(values)?,
                oconus,
                civilian_tdy_ub_allowance: civilian_allowance(values, derived)?,
            }),
            OrdersType::PermanentChangeOfStation => OrdersDetails::PermanentChangeOfStation(
                DependentsDetails { has_dependents: has_dependents(values)?, oconus },
            ),
            OrdersType::LocalMove => {
                OrdersDetails::LocalMove(DependentsDetails { has_dependents: has_dependents(values)?, oconus })
            },
            OrdersType::Retirement => {
                OrdersDetails::Retirement(DependentsDetails { has_dependents: has_dependents(values)?, oconus })
            },
            OrdersType::Separation => {
                OrdersDetails::Separation(DependentsDetails { has_dependents: has_dependents(values)?, oconus })
            },
        };

        Ok(Self {
            issue_date: required(values.issue_date, "issueDate")?,
            report_by_date: required(values.report_by_date, "reportByDate")?,
            grade: required(values.grade, "grade")?,
            origin_duty_location_id: required(values.origin_duty_location.as_ref(), "originDutyLocation")?
                .id
                .clone(),
            new_duty_location_id: required(values.new_duty_location.as_ref(), "newDutyLocation")?.id.clone(),
            counseling_office_id: if derived.counseling_office_required {
                values.counseling_office_id.clone()
            } else {
                None
            },
            uploaded_orders: values.uploaded_orders.clone(),
            orders,
        })
    }

    pub const fn orders_type(&self) -> OrdersType {
        match self.orders {
            OrdersDetails::PermanentChangeOfStation(_) => OrdersType::PermanentChangeOfStation,
            OrdersDetails::LocalMove(_) => OrdersType::LocalMove,
            OrdersDetails::Retirement(_) => OrdersType::Retirement,
            OrdersDetails::Separation(_) => OrdersType::Separation,
            OrdersDetails::TemporaryDuty(_) => OrdersType::TemporaryDuty,
            OrdersDetails::EarlyReturnOfDependents(_) => OrdersType::EarlyReturnOfDependents,
            OrdersDetails::StudentTravel(_) => OrdersType::StudentTravel,
        }
    }

    pub const fn has_dependents(&self) -> bool {
        match &self.orders {
            OrdersDetails::PermanentChangeOfStation(d)
            | OrdersDetails::LocalMove(d)
            | OrdersDetails::Retirement(d)
            | OrdersDetails::Separation(d) => d.has_dependents,
            OrdersDetails::TemporaryDuty(d) => d.has_dependents,
            OrdersDetails::EarlyReturnOfDependents(_) | OrdersDetails::StudentTravel(_) => true,
        }
    }

    pub const fn oconus(&self) -> Option<&OconusEntitlement> {
        match &self.orders {
            OrdersDetails::PermanentChangeOfStation(d)
            | OrdersDetails::LocalMove(d)
            | OrdersDetails::Retirement(d)
            | OrdersDetails::Separation(d) => d.oconus.as_ref(),
            OrdersDetails::TemporaryDuty(d) => d.oconus.as_ref(),
            OrdersDetails::EarlyReturnOfDependents(d) | OrdersDetails::StudentTravel(d) => d.oconus.as_ref(),
        }
    }

    /// # Errors
    /// [`OrdersError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, OrdersError> {
        serde_json::to_string(self).context("Encoding orders payload")
    }
}

fn has_dependents(values: &OrdersFormValues) -> Result<bool, OrdersError> {
    required(values.has_dependents.as_bool(), "hasDependents")
}

fn oconus_entitlement(
    values: &OrdersFormValues,
    derived: &DerivedFlags,
) -> Result<Option<OconusEntitlement>, OrdersError> {
    if !derived.show_accompanied_tour {
        return Ok(None);
    }
    Ok(Some(OconusEntitlement {
        accompanied_tour: required(values.accompanied_tour, "accompaniedTour")?,
        dependents_under_twelve: count(&values.dependents_under_twelve, "dependentsUnderTwelve")?,
        dependents_twelve_and_over: count(&values.dependents_twelve_and_over, "dependentsTwelveAndOver")?,
    }))
}

fn civilian_allowance(values: &OrdersFormValues, derived: &DerivedFlags) -> Result<Option<u32>, OrdersError> {
    if !derived.is_civilian_tdy_move || values.civilian_tdy_ub_allowance.trim().is_empty() {
        return Ok(None);
    }
    whole_pounds(coerce_weight(&values.civilian_tdy_ub_allowance))
        .map(Some)
        .ok_or_else(|| invalid("civilianTdyUbAllowance"))
}

fn count(raw: &str, field: &'static str) -> Result<u32, OrdersError> {
    raw.trim().parse().map_err(|_| invalid(field))
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, OrdersError> {
    value.ok_or_else(|| OrdersError::Validation {
        message: Cow::Owned(format!("{field} is required")),
        context: Some("Building orders payload".into()),
    })
}

fn invalid(field: &'static str) -> OrdersError {
    OrdersError::Validation {
        message: Cow::Owned(format!("{field} is not a valid number")),
        context: Some("Building orders payload".into()),
    }
}
