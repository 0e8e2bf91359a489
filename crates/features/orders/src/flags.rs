//! Feature flag gate consulted once when a form mounts.

use crate::error::OrdersError;
use crate::ports::FeatureFlagService;
use mymove_domain::config::FlagKeysConfig;
use mymove_domain::features::FeatureFlagSet;
use std::collections::BTreeSet;
use std::future::{Future, ready};
use tracing::{info, warn};

/// Resolves the flag keys from [`FlagKeysConfig`] into a [`FeatureFlagSet`].
///
/// Lookups run concurrently. A failed lookup counts as disabled and is only logged; the gate
/// never fails and never retries.
#[derive(Debug)]
pub struct FeatureFlagGate<'a, F> {
    service: &'a F,
    keys: &'a FlagKeysConfig,
}

impl<'a, F: FeatureFlagService> FeatureFlagGate<'a, F> {
    pub const fn new(service: &'a F, keys: &'a FlagKeysConfig) -> Self {
        Self { service, keys }
    }

    pub async fn resolve(&self) -> FeatureFlagSet {
        let (ub, alaska) = tokio::join!(
            self.lookup(&self.keys.unaccompanied_baggage),
            self.lookup(&self.keys.alaska)
        );

        let mut flags = FeatureFlagSet::empty();
        flags.set(FeatureFlagSet::UNACCOMPANIED_BAGGAGE, ub);
        flags.set(FeatureFlagSet::ALASKA, alaska);

        info!(ub_enabled = ub, alaska_enabled = alaska, "Feature flags resolved");
        flags
    }

    async fn lookup(&self, key: &str) -> bool {
        match self.service.is_enabled(key).await {
            Ok(enabled) => enabled,
            Err(err) => {
                warn!(flag = key, error.kind = err.kind(), error = %err, "Flag lookup failed, treating as disabled");
                false
            },
        }
    }
}

/// Flag service answering from a fixed set of enabled keys.
#[derive(Debug, Clone, Default)]
pub struct StaticFlagService {
    enabled: BTreeSet<String>,
}

impl StaticFlagService {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self { enabled: keys.into_iter().map(Into::into).collect() }
    }

    /// Enables the configured keys matching `flags`.
    pub fn from_flags(flags: FeatureFlagSet, keys: &FlagKeysConfig) -> Self {
        let mut enabled = BTreeSet::new();
        if flags.ub_enabled() {
            enabled.insert(keys.unaccompanied_baggage.clone());
        }
        if flags.alaska_enabled() {
            enabled.insert(keys.alaska.clone());
        }
        Self { enabled }
    }
}

impl FeatureFlagService for StaticFlagService {
    fn is_enabled(&self, key: &str) -> impl Future<Output = Result<bool, OrdersError>> + Send {
        ready(Ok(self.enabled.contains(key)))
    }
}
