//! Luogu Profile
//!
//! Fetches the embedded JSON of a public Luogu profile page and reshapes it
//! into a compact summary: redacted profile, elo ceiling, and cross-tabulated
//! problem-solving statistics.
//!
//! This crate provides the core implementation for the
//! `luogu-profile` CLI tool; the `handler` module additionally exposes the
//! request front end used by worker-style deployments.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install luogu-profile
//! luogu-profile --help
//! ```

pub mod client;
pub mod commands;
pub mod handler;
pub mod output;
pub mod stats;
pub mod summary;
pub mod utils;
