//! # Domain Models
//!
//! Pure intake types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, networking, or rule evaluation. Rules live in `mymove-orders`.

pub mod config;
pub mod features;
pub mod location;
pub mod options;
pub mod orders;
