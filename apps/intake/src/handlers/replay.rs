use crate::models::scenario::{DryRunSubmitter, ReplayReport, Scenario, ScenarioOffices};

use anyhow::{Context, Result};
use mymove::domain::config::IntakeConfig;
use mymove::features::orders::flags::StaticFlagService;
use mymove::features::orders::ports::OrdersSubmitter;
use mymove::features::orders::{FieldChange, OrdersForm};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Replays `path` against a fresh form and prints a [`ReplayReport`] to stdout.
pub async fn replay_scenario(config: IntakeConfig, path: &Path, ub: bool, alaska: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario {}", path.display()))?;

    let report = run(config, scenario, ub, alaska).await;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Drives the form through the scenario. Submission errors end up in the report, not in `Err`.
pub async fn run(config: IntakeConfig, scenario: Scenario, ub: bool, alaska: bool) -> ReplayReport {
    let mut enabled = scenario.flags.clone();
    if ub {
        enabled.push(config.flags.unaccompanied_baggage.clone());
    }
    if alaska {
        enabled.push(config.flags.alaska.clone());
    }
    let flag_service = StaticFlagService::new(enabled);
    let offices = ScenarioOffices(&scenario.counseling_offices);

    let mut form = OrdersForm::mount(config, scenario.variant, &flag_service, scenario.initial).await;
    if form.values().origin_duty_location.is_some() {
        form.refresh_counseling_offices(&offices).await;
    }

    for change in scenario.changes {
        let refresh = matches!(change, FieldChange::OriginDutyLocation(_));
        form.on_field_change(change);
        if refresh {
            form.refresh_counseling_offices(&offices).await;
        }
    }
    info!(
        errors = form.report().errors.len(),
        warnings = form.report().warnings.len(),
        "Scenario replayed"
    );

    let mut payload = None;
    let mut submission_error = None;
    if scenario.submit {
        let submitter = DryRunSubmitter { reject: scenario.reject_submission };
        match form.begin_submit() {
            Ok(built) => {
                let result = submitter.submit(&built).await;
                if let Err(err) = form.finish_submit(result) {
                    submission_error = Some(err.to_string());
                }
                payload = Some(built);
            },
            Err(err) => submission_error = Some(err.to_string()),
        }
    }

    ReplayReport { snapshot: form.snapshot(), payload, submission_error }
}
