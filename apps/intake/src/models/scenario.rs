use mymove::domain::options::SelectOption;
use mymove::features::orders::payload::OrdersPayload;
use mymove::features::orders::ports::{CounselingOfficeService, OrdersSubmitter, SubmissionReceipt};
use mymove::features::orders::{FieldChange, FormSnapshot, FormVariant, OrdersError, OrdersFormValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::{Future, ready};

/// A recorded intake session.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    pub variant: FormVariant,
    /// Flag keys reported as enabled.
    pub flags: Vec<String>,
    /// Values the form opens with.
    pub initial: OrdersFormValues,
    pub changes: Vec<FieldChange>,
    /// Counseling offices by origin duty location id.
    pub counseling_offices: BTreeMap<String, Vec<SelectOption>>,
    /// Submit after the last change.
    pub submit: bool,
    /// Make the simulated submission API reject the payload.
    pub reject_submission: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub snapshot: FormSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<OrdersPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_error: Option<String>,
}

/// Counseling office lookup answered from the scenario file.
#[derive(Debug)]
pub struct ScenarioOffices<'a>(pub &'a BTreeMap<String, Vec<SelectOption>>);

impl CounselingOfficeService for ScenarioOffices<'_> {
    fn list(
        &self,
        duty_location_id: &str,
    ) -> impl Future<Output = Result<Vec<SelectOption>, OrdersError>> + Send {
        ready(Ok(self.0.get(duty_location_id).cloned().unwrap_or_default()))
    }
}

/// Submission API stand-in: accepts or rejects without sending anything.
#[derive(Debug, Clone, Copy)]
pub struct DryRunSubmitter {
    pub reject: bool,
}

impl OrdersSubmitter for DryRunSubmitter {
    fn submit(
        &self,
        _payload: &OrdersPayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, OrdersError>> + Send {
        ready(if self.reject {
            Err(OrdersError::Submission { message: "rejected by dry run".into(), context: None })
        } else {
            Ok(SubmissionReceipt { orders_id: "dry-run".to_owned() })
        })
    }
}
