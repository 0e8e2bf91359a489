//! Kernel utilities shared across slices.
//! Keep this crate lightweight: today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use mymove_kernel::config::load_config;
//! use mymove_kernel::domain::config::IntakeConfig;
//!
//! let cfg: IntakeConfig = load_config(Some("intake.toml")).unwrap_or_default();
//! ```

pub mod config;

pub use mymove_domain as domain;
