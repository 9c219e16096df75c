//! Output readers/writers for summary data.

pub mod json;

// Re-export main functions
pub use json::{read_summary, read_uid_list, write_summary};
