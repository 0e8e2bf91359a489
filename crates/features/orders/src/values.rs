//! Raw form state and the field change events that mutate it.

use crate::schema::Field;
use chrono::NaiveDate;
use mymove_domain::location::DutyLocationRef;
use mymove_domain::orders::{DependentsAnswer, OrdersType, PayGrade};
use serde::{Deserialize, Serialize};

/// Everything the user has entered so far.
///
/// Numeric inputs are kept as typed text; the schema decides how each one is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersFormValues {
    pub orders_type: Option<OrdersType>,
    pub issue_date: Option<NaiveDate>,
    pub report_by_date: Option<NaiveDate>,
    pub has_dependents: DependentsAnswer,
    pub new_duty_location: Option<DutyLocationRef>,
    pub grade: Option<PayGrade>,
    pub origin_duty_location: Option<DutyLocationRef>,
    pub counseling_office_id: Option<String>,
    pub accompanied_tour: Option<bool>,
    pub dependents_under_twelve: String,
    pub dependents_twelve_and_over: String,
    pub civilian_tdy_ub_allowance: String,
    /// Ids of uploaded orders documents.
    pub uploaded_orders: Vec<String>,
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    OrdersType(Option<OrdersType>),
    IssueDate(Option<NaiveDate>),
    ReportByDate(Option<NaiveDate>),
    HasDependents(DependentsAnswer),
    NewDutyLocation(Option<DutyLocationRef>),
    Grade(Option<PayGrade>),
    OriginDutyLocation(Option<DutyLocationRef>),
    CounselingOffice(Option<String>),
    AccompaniedTour(Option<bool>),
    DependentsUnderTwelve(String),
    DependentsTwelveAndOver(String),
    CivilianTdyUbAllowance(String),
    UploadedOrders(Vec<String>),
}

impl FieldChange {
    pub const fn field(&self) -> Field {
        match self {
            Self::OrdersType(_) => Field::OrdersType,
            Self::IssueDate(_) => Field::IssueDate,
            Self::ReportByDate(_) => Field::ReportByDate,
            Self::HasDependents(_) => Field::HasDependents,
            Self::NewDutyLocation(_) => Field::NewDutyLocation,
            Self::Grade(_) => Field::Grade,
            Self::OriginDutyLocation(_) => Field::OriginDutyLocation,
            Self::CounselingOffice(_) => Field::CounselingOffice,
            Self::AccompaniedTour(_) => Field::AccompaniedTour,
            Self::DependentsUnderTwelve(_) => Field::DependentsUnderTwelve,
            Self::DependentsTwelveAndOver(_) => Field::DependentsTwelveAndOver,
            Self::CivilianTdyUbAllowance(_) => Field::CivilianTdyUbAllowance,
            Self::UploadedOrders(_) => Field::UploadedOrders,
        }
    }
}

impl OrdersFormValues {
    /// Writes a change into the values. Rules and lock handling are the form's job.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::OrdersType(v) => self.orders_type = v,
            FieldChange::IssueDate(v) => self.issue_date = v,
            FieldChange::ReportByDate(v) => self.report_by_date = v,
            FieldChange::HasDependents(v) => self.has_dependents = v,
            FieldChange::NewDutyLocation(v) => self.new_duty_location = v,
            FieldChange::Grade(v) => self.grade = v,
            FieldChange::OriginDutyLocation(v) => self.origin_duty_location = v,
            FieldChange::CounselingOffice(v) => self.counseling_office_id = v,
            FieldChange::AccompaniedTour(v) => self.accompanied_tour = v,
            FieldChange::DependentsUnderTwelve(v) => self.dependents_under_twelve = v,
            FieldChange::DependentsTwelveAndOver(v) => self.dependents_twelve_and_over = v,
            FieldChange::CivilianTdyUbAllowance(v) => self.civilian_tdy_ub_allowance = v,
            FieldChange::UploadedOrders(v) => self.uploaded_orders = v,
        }
    }
}
