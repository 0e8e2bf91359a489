use crate::features;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for the intake engine.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntakeConfigInner {
    pub flags: FlagKeysConfig,
    pub validation: ValidationConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into each form.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    #[serde(flatten, default)]
    inner: Arc<IntakeConfigInner>,
}

impl Deref for IntakeConfig {
    type Target = IntakeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for IntakeConfig {
    fn deref_mut(&mut self) -> &mut IntakeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Keys looked up in the feature flag service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagKeysConfig {
    pub unaccompanied_baggage: String,
    pub alaska: String,
}

/// How an origin equal to the new duty location is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateLocationPolicy {
    /// Advisory warning only; submission stays possible.
    Warn,
    /// Field error on the new duty location; submission is blocked.
    #[default]
    Block,
}

/// Validation thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub duplicate_location_policy: DuplicateLocationPolicy,
    /// Hard upper bound for the civilian TDY UB allowance, in pounds.
    pub ub_allowance_max: u32,
    /// Allowances above this value (and within the bound) show an advisory banner.
    pub ub_warning_threshold: u32,
}

/// Duty location search tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this never reach the search service.
    pub min_query_length: usize,
}

/// Logging knobs consumed by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for FlagKeysConfig {
    fn default() -> Self {
        Self {
            unaccompanied_baggage: features::UNACCOMPANIED_BAGGAGE.to_owned(),
            alaska: features::ALASKA.to_owned(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            duplicate_location_policy: DuplicateLocationPolicy::default(),
            ub_allowance_max: 2000,
            ub_warning_threshold: 350,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_query_length: 2 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None }
    }
}
