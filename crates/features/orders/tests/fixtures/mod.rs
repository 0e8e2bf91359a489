use chrono::NaiveDate;
use mymove_domain::location::{Address, DutyLocationRef};
use mymove_domain::options::SelectOption;
use mymove_domain::orders::{DependentsAnswer, OrdersType, PayGrade};
use mymove_orders::OrdersFormValues;
use mymove_orders::OrdersError;
use mymove_orders::payload::OrdersPayload;
use mymove_orders::ports::{CounselingOfficeService, DutyLocationService, OrdersSubmitter, SubmissionReceipt};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn location(id: &str, is_oconus: bool, counseling: bool) -> DutyLocationRef {
    DutyLocationRef {
        id: id.to_owned(),
        name: format!("{id} duty location"),
        provides_services_counseling: counseling,
        address: Address { is_oconus, ..Address::default() },
        affiliation: None,
    }
}

pub fn fort_bragg() -> DutyLocationRef {
    location("fort-bragg", false, true)
}

pub fn ramstein() -> DutyLocationRef {
    location("ramstein", true, false)
}

pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// A complete CONUS-to-OCONUS PCS without dependents.
pub fn complete_values() -> OrdersFormValues {
    OrdersFormValues {
        orders_type: Some(OrdersType::PermanentChangeOfStation),
        issue_date: date(2024, 4, 1),
        report_by_date: date(2024, 7, 15),
        has_dependents: DependentsAnswer::No,
        new_duty_location: Some(ramstein()),
        grade: Some(PayGrade::E5),
        origin_duty_location: Some(location("fort-hood", false, false)),
        ..OrdersFormValues::default()
    }
}

#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    pub fail: bool,
    pub payloads: Mutex<Vec<OrdersPayload>>,
}

impl RecordingSubmitter {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl OrdersSubmitter for RecordingSubmitter {
    async fn submit(&self, payload: &OrdersPayload) -> Result<SubmissionReceipt, OrdersError> {
        self.payloads.lock().push(payload.clone());
        if self.fail {
            return Err(OrdersError::Submission { message: "500 Internal Server Error".into(), context: None });
        }
        Ok(SubmissionReceipt { orders_id: format!("orders-{}", self.payloads.lock().len()) })
    }
}

#[derive(Debug, Default)]
pub struct CounselingOffices {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl CounselingOfficeService for CounselingOffices {
    async fn list(&self, duty_location_id: &str) -> Result<Vec<SelectOption>, OrdersError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(OrdersError::Lookup { message: "timeout".into(), context: None });
        }
        Ok(vec![
            SelectOption::new("ppso-1", format!("{duty_location_id} PPPO")),
            SelectOption::new("ppso-2", "Transportation Office"),
        ])
    }
}

/// Answers short queries slowly so a longer follow-up query overtakes them.
#[derive(Debug, Default)]
pub struct SlowLocations {
    pub queries: AtomicUsize,
}

impl DutyLocationService for SlowLocations {
    async fn query(&self, text: &str) -> Result<Vec<DutyLocationRef>, OrdersError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let delay = if text.len() < 6 { 200 } else { 5 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if text == "error" {
            return Err(OrdersError::Search { message: "bad gateway".into(), context: None });
        }
        Ok(vec![location(&format!("{text}-1"), false, false)])
    }

    async fn lookup(&self, id: &str) -> Result<DutyLocationRef, OrdersError> {
        if id == "missing" {
            return Err(OrdersError::Lookup { message: "not found".into(), context: None });
        }
        Ok(location(id, false, false))
    }
}

/// Never answers; the submission only ends when its future is dropped.
#[derive(Debug, Default)]
pub struct StalledSubmitter;

impl OrdersSubmitter for StalledSubmitter {
    async fn submit(&self, _payload: &OrdersPayload) -> Result<SubmissionReceipt, OrdersError> {
        std::future::pending().await
    }
}
