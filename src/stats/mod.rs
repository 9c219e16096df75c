//! Problem statistics: fixed category enumerations and the
//! two-axis frequency-table builder.

pub mod aggregator;
pub mod categories;

// Re-export main types and functions
pub use aggregator::{aggregate, CountRow, ProblemRecord, ProblemStats};
pub use categories::{Difficulty, ProblemType, TOTAL_KEY};
