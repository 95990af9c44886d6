//! Domain logic for StudyBuddy.
//!
//! Everything here is pure: no database access, no HTTP. The `db` and `api`
//! crates build on these types and functions.

pub mod error;
pub mod srs;
pub mod stats;
pub mod types;
pub mod validation;
