//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod batch;
pub mod fetch;

// Re-export main command functions
pub use batch::{execute_batch, BatchArgs};
pub use fetch::{execute_fetch, validate_args, FetchArgs};
