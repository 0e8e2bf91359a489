//! # Orders Intake Engine
//!
//! Decides, from duty locations, feature flags, and earlier answers, which orders fields are
//! shown, which are required, and what gets submitted.
//!
//! ## Pipeline
//!
//! Every field change runs the same synchronous chain inside [`form::OrdersForm`]:
//!
//! 1. **Location classifier ([`location`])**: OCONUS, counseling, and duplicate checks.
//! 2. **Rule engines ([`tour`], [`allowance`])**: accompanied tour and dependent ages, the
//!    dependents lock, and the civilian TDY UB allowance.
//! 3. **Derived flags ([`derived`])**: the pure result of 1 and 2.
//! 4. **Schema ([`schema`])**: per-field rules for the visible fields, then validation.
//!
//! Network collaborators are traits in [`ports`]. The only async work is the flag lookup at
//! mount ([`flags`]), duty location search ([`search`]), counseling office refresh, and
//! submission.

pub mod allowance;
pub mod derived;
mod error;
pub mod flags;
pub mod form;
pub mod location;
pub mod payload;
pub mod ports;
pub mod ranks;
pub mod schema;
pub mod search;
pub mod tour;
pub mod values;

pub use crate::error::{OrdersError, OrdersErrorExt};
pub use crate::form::{FormSnapshot, OrdersForm};
pub use crate::schema::FormVariant;
pub use crate::values::{FieldChange, OrdersFormValues};
