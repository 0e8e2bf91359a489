//! Collaborator contracts.
//!
//! The engine never talks to the network itself. Each external service is a trait returning a
//! `Send` future, so implementations can be plain `async fn`s backed by any HTTP client (or by
//! in-memory fakes in tests).

use crate::error::OrdersError;
use crate::payload::OrdersPayload;
use mymove_domain::location::DutyLocationRef;
use mymove_domain::options::SelectOption;
use mymove_domain::orders::Affiliation;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Boolean flag lookup by key.
pub trait FeatureFlagService: Send + Sync {
    fn is_enabled(&self, key: &str) -> impl Future<Output = Result<bool, OrdersError>> + Send;
}

/// Duty location search and lookup.
pub trait DutyLocationService: Send + Sync {
    fn query(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<DutyLocationRef>, OrdersError>> + Send;

    fn lookup(&self, id: &str) -> impl Future<Output = Result<DutyLocationRef, OrdersError>> + Send;
}

/// Rank options offered for a branch of service.
pub trait RankOptionsService: Send + Sync {
    fn list(
        &self,
        affiliation: Affiliation,
    ) -> impl Future<Output = Result<Vec<SelectOption>, OrdersError>> + Send;
}

/// Counseling offices attached to an origin duty location.
pub trait CounselingOfficeService: Send + Sync {
    fn list(
        &self,
        duty_location_id: &str,
    ) -> impl Future<Output = Result<Vec<SelectOption>, OrdersError>> + Send;
}

/// The orders submission API.
pub trait OrdersSubmitter: Send + Sync {
    fn submit(
        &self,
        payload: &OrdersPayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, OrdersError>> + Send;
}

/// Acknowledgement returned by the submission API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub orders_id: String,
}
