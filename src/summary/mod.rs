//! Profile reshaping and the summary output schema.

pub mod reshape;
pub mod schema;

// Re-export main types and functions
pub use reshape::{reshape, REDACTED_KEYS};
pub use schema::{UserInfo, UserSummary};
