//! Facade crate for the intake workspace.
//! Re-exports domain/kernel primitives and the orders slice.
//! Keep this crate thin: it composes other crates, it does not implement rules.
//!
//! ## Usage
//! - Depend on `mymove` only; reach the slices through [`features`].
//! - Call [`load_intake_config`] once at startup and hand the result to each form.

use mymove_domain::config::IntakeConfig;
pub use mymove_domain as domain;
use mymove_kernel::config::{ConfigError, load_config};
pub use mymove_kernel as kernel;
use std::path::Path;

/// Feature registry for runtime introspection.
pub mod features {
    pub use mymove_orders as orders;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["orders"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Loads [`IntakeConfig`] from an optional file plus `MYMOVE__*` overrides.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or malformed.
pub fn load_intake_config(path: Option<&Path>) -> Result<IntakeConfig, ConfigError> {
    load_config(path)
}
