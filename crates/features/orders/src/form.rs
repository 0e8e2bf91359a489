//! Form orchestrator.
//!
//! [`OrdersForm`] owns the values of one form instance and re-runs the derivation pipeline
//! (classifier, rule engines, schema builder, validator) synchronously inside every change
//! handler, so visibility and validity never lag behind the latest input.

use crate::allowance::{AllowanceLimits, UbEstimate, UbEstimateInput, coerce_weight, estimate_ub_allowance};
use crate::derived::{DerivedFlags, FieldGroup, Visibility};
use crate::error::OrdersError;
use crate::flags::FeatureFlagGate;
use crate::payload::OrdersPayload;
use crate::ports::{CounselingOfficeService, FeatureFlagService, OrdersSubmitter, SubmissionReceipt};
use crate::schema::{Field, FormVariant, SchemaDescriptor, ValidationReport, build_schema};
use crate::tour::dependents_lock_transition;
use crate::values::{FieldChange, OrdersFormValues};
use mymove_domain::config::IntakeConfig;
use mymove_domain::features::FeatureFlagSet;
use mymove_domain::options::SelectOption;
use mymove_domain::orders::{DependentsAnswer, OrdersType};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Banner text shown when the submission API rejects the form.
pub const SUBMISSION_FAILED_MESSAGE: &str = "There was an error saving your orders. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Failed(String),
    Succeeded(SubmissionReceipt),
}

#[derive(Debug)]
pub struct OrdersForm {
    config: IntakeConfig,
    variant: FormVariant,
    flags: FeatureFlagSet,
    values: OrdersFormValues,
    derived: DerivedFlags,
    schema: SchemaDescriptor,
    report: ValidationReport,
    counseling_offices: Vec<SelectOption>,
    submission: SubmissionState,
}

impl OrdersForm {
    /// Creates a form with already-resolved flags.
    ///
    /// Visibility is computed from `initial`, so pre-filled (edit) forms open with the right
    /// groups showing. A locked orders type in `initial` forces the dependents answer.
    pub fn new(
        config: IntakeConfig,
        variant: FormVariant,
        flags: FeatureFlagSet,
        initial: OrdersFormValues,
    ) -> Self {
        let mut values = initial;
        values.has_dependents =
            dependents_lock_transition(None, values.orders_type, values.has_dependents).has_dependents;

        let mut form = Self {
            config,
            variant,
            flags,
            values,
            derived: DerivedFlags::default(),
            schema: SchemaDescriptor::default(),
            report: ValidationReport::default(),
            counseling_offices: Vec::new(),
            submission: SubmissionState::Idle,
        };
        form.recompute();
        form
    }

    /// Resolves feature flags once, then creates the form.
    pub async fn mount<F: FeatureFlagService>(
        config: IntakeConfig,
        variant: FormVariant,
        flag_service: &F,
        initial: OrdersFormValues,
    ) -> Self {
        let flags = FeatureFlagGate::new(flag_service, &config.flags).resolve().await;
        info!(?variant, "Mounting orders form");
        Self::new(config, variant, flags, initial)
    }

    /// Applies one edit and recomputes derived state before returning.
    pub fn on_field_change(&mut self, change: FieldChange) {
        let field = change.field();
        let previous_type = self.values.orders_type;
        let previous_origin = self.values.origin_duty_location.as_ref().map(|origin| origin.id.clone());
        self.values.apply(change);

        match field {
            Field::OrdersType => {
                let lock = dependents_lock_transition(
                    previous_type,
                    self.values.orders_type,
                    self.values.has_dependents,
                );
                self.values.has_dependents = lock.has_dependents;
            },
            Field::HasDependents if self.derived.has_dependents_disabled => {
                // Disabled while a locked orders type is selected.
                self.values.has_dependents = DependentsAnswer::Yes;
            },
            Field::OriginDutyLocation => {
                let origin = self.values.origin_duty_location.as_ref();
                let origin_changed = origin.map(|o| o.id.as_str()) != previous_origin.as_deref();
                let provides_counseling = origin.is_some_and(|o| o.provides_services_counseling);
                // Offices belong to the previous origin until the next refresh.
                if origin_changed || !provides_counseling {
                    self.values.counseling_office_id = None;
                    self.counseling_offices.clear();
                }
            },
            _ => {},
        }

        self.recompute();
        debug!(%field, submit_enabled = self.is_submit_enabled(), "Field changed");
    }

    fn recompute(&mut self) {
        self.derived = DerivedFlags::derive(&self.values, self.flags);
        self.schema =
            build_schema(&self.derived, self.variant, AllowanceLimits::from(&self.config.validation));
        self.report = self.schema.validate(&self.values, &self.derived, &self.config.validation);
        debug!(derived = ?self.derived, errors = self.report.errors.len(), "Derived state recomputed");
    }

    pub const fn values(&self) -> &OrdersFormValues {
        &self.values
    }

    pub const fn derived(&self) -> &DerivedFlags {
        &self.derived
    }

    pub const fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub const fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub const fn flags(&self) -> FeatureFlagSet {
        self.flags
    }

    pub const fn variant(&self) -> FormVariant {
        self.variant
    }

    pub const fn visibility(&self, group: FieldGroup) -> Visibility {
        self.derived.visibility(group)
    }

    pub const fn is_dependents_disabled(&self) -> bool {
        self.derived.has_dependents_disabled
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Valid against the current schema and nothing in flight.
    pub fn is_submit_enabled(&self) -> bool {
        self.report.is_valid() && !self.is_submitting()
    }

    /// The single banner error left by the last failed submission.
    pub fn banner_error(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.submission {
            SubmissionState::Succeeded(receipt) => Some(receipt),
            _ => None,
        }
    }

    /// Orders types the user may pick; Alaska-only types need the Alaska flag.
    pub fn orders_type_options(&self) -> Vec<SelectOption> {
        OrdersType::iter()
            .filter(|t| !t.requires_alaska() || self.flags.alaska_enabled())
            .map(|t| SelectOption::new(t.as_ref(), t.label()))
            .collect()
    }

    /// Advisory banner for the civilian TDY UB allowance.
    pub fn ub_allowance_warning(&self) -> Option<&'static str> {
        let visible = self.schema.contains(Field::CivilianTdyUbAllowance);
        let limits = AllowanceLimits::from(&self.config.validation);
        (visible && limits.shows_warning(coerce_weight(&self.values.civilian_tdy_ub_allowance)))
            .then_some(crate::allowance::UB_ALLOWANCE_WARNING)
    }

    /// UB entitlement estimate for the current answers.
    pub fn ub_estimate(&self) -> UbEstimate {
        let count = |raw: &str| raw.trim().parse().unwrap_or(0);
        let ages_visible = self.derived.show_dependent_age_fields;
        estimate_ub_allowance(&UbEstimateInput {
            affiliation: self.values.origin_duty_location.as_ref().and_then(|o| o.affiliation),
            pay_grade: self.values.grade,
            orders_type: self.values.orders_type,
            is_oconus_move: self.derived.is_oconus_move,
            dependents_authorized: self.values.has_dependents.is_yes(),
            accompanied_tour: self.derived.show_accompanied_tour
                && self.values.accompanied_tour.unwrap_or(false),
            dependents_under_twelve: if ages_visible { count(&self.values.dependents_under_twelve) } else { 0 },
            dependents_twelve_and_over: if ages_visible {
                count(&self.values.dependents_twelve_and_over)
            } else {
                0
            },
        })
    }

    pub fn counseling_offices(&self) -> &[SelectOption] {
        &self.counseling_offices
    }

    /// Reloads the counseling office options for the current origin.
    ///
    /// A lookup failure leaves the list empty; the form stays usable.
    pub async fn refresh_counseling_offices<C: CounselingOfficeService>(&mut self, service: &C) {
        let origin_id = self
            .values
            .origin_duty_location
            .as_ref()
            .filter(|origin| origin.provides_services_counseling)
            .map(|origin| origin.id.clone());

        let Some(origin_id) = origin_id else {
            self.counseling_offices.clear();
            return;
        };

        self.counseling_offices = match service.list(&origin_id).await {
            Ok(offices) => offices,
            Err(err) => {
                warn!(origin = %origin_id, error.kind = err.kind(), error = %err, "Counseling office lookup failed");
                Vec::new()
            },
        };

        let selected_still_offered = self.values.counseling_office_id.as_ref().is_none_or(|selected| {
            self.counseling_offices.iter().any(|office| &office.key == selected)
        });
        if !selected_still_offered {
            self.values.counseling_office_id = None;
            self.recompute();
        }
    }

    /// Marks a submission as in flight and returns the payload to send.
    ///
    /// # Errors
    /// * [`OrdersError::Busy`] if a submission is already in flight.
    /// * [`OrdersError::Validation`] if the form does not satisfy its schema.
    pub fn begin_submit(&mut self) -> Result<OrdersPayload, OrdersError> {
        if self.is_submitting() {
            return Err(OrdersError::Busy {
                message: "Orders are already being saved".into(),
                context: None,
            });
        }
        if !self.report.is_valid() {
            let fields: Vec<String> = self.report.errors.keys().map(ToString::to_string).collect();
            return Err(OrdersError::Validation {
                message: format!("Invalid fields: {}", fields.join(", ")).into(),
                context: None,
            });
        }

        let payload = OrdersPayload::from_values(&self.values, &self.derived)?;
        self.submission = SubmissionState::InFlight;
        Ok(payload)
    }

    /// Records the submission outcome. Failures become the banner error; nothing is retried.
    ///
    /// # Errors
    /// Passes the submitter's error through.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionReceipt, OrdersError>,
    ) -> Result<SubmissionReceipt, OrdersError> {
        match result {
            Ok(receipt) => {
                info!(orders_id = %receipt.orders_id, "Orders submitted");
                self.submission = SubmissionState::Succeeded(receipt.clone());
                Ok(receipt)
            },
            Err(err) => {
                warn!(error.kind = err.kind(), error = %err, "Orders submission failed");
                self.submission = SubmissionState::Failed(SUBMISSION_FAILED_MESSAGE.to_owned());
                Err(err)
            },
        }
    }

    /// Validates, submits once, and records the outcome.
    ///
    /// # Errors
    /// See [`OrdersForm::begin_submit`] and [`OrdersForm::finish_submit`].
    ///
    /// Dropping the returned future before it completes counts as a failed submission, so the
    /// form never stays in flight.
    pub async fn submit<S: OrdersSubmitter>(&mut self, submitter: &S) -> Result<SubmissionReceipt, OrdersError> {
        let payload = self.begin_submit()?;
        let guard = InFlightGuard { form: self };
        let result = submitter.submit(&payload).await;
        guard.form.finish_submit(result)
    }

    /// Gives up on an in-flight submission whose outcome will never be recorded.
    ///
    /// The banner error is set and the form can be submitted again. No-op when nothing is in
    /// flight.
    pub fn abandon_submit(&mut self) {
        if self.is_submitting() {
            warn!("Orders submission abandoned before completion");
            self.submission = SubmissionState::Failed(SUBMISSION_FAILED_MESSAGE.to_owned());
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            variant: self.variant,
            values: self.values.clone(),
            derived: self.derived,
            visibility: FieldGroup::iter().map(|group| (group, self.visibility(group))).collect(),
            schema: self.schema.clone(),
            errors: self.report.errors.iter().map(|(f, m)| (*f, m.to_string())).collect(),
            warnings: self.report.warnings.iter().map(|w| w.message()).collect(),
            orders_type_options: self.orders_type_options(),
            counseling_offices: self.counseling_offices.clone(),
            ub_estimate: self.ub_estimate(),
            is_submit_enabled: self.is_submit_enabled(),
            banner_error: self.banner_error().map(ToOwned::to_owned),
        }
    }
}

/// Abandons the submission unless [`OrdersForm::finish_submit`] ran first.
struct InFlightGuard<'a> {
    form: &'a mut OrdersForm,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.form.abandon_submit();
    }
}

/// Serializable view of a form at one point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub variant: FormVariant,
    pub values: OrdersFormValues,
    pub derived: DerivedFlags,
    pub visibility: BTreeMap<FieldGroup, Visibility>,
    pub schema: SchemaDescriptor,
    pub errors: BTreeMap<Field, String>,
    pub warnings: Vec<&'static str>,
    pub orders_type_options: Vec<SelectOption>,
    pub counseling_offices: Vec<SelectOption>,
    pub ub_estimate: UbEstimate,
    pub is_submit_enabled: bool,
    pub banner_error: Option<String>,
}
