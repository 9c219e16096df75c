//! Output JSON schema for reshaped user summaries.
//!
//! This module defines the structure of the JSON we write to disk and serve
//! from the edge handler. Field names follow the remote site's camelCase so
//! downstream consumers of the original format keep working.

use crate::stats::ProblemStats;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One user's reshaped profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Compact identity block, read from the pre-redaction user object
    pub info: UserInfo,

    /// The remaining user object after redaction, passed through as-is
    pub user: Map<String, Value>,

    /// Elo ceiling, copied untransformed (object or null)
    pub elo: Value,

    /// Statistics over the passed-problems list, when the payload has one
    #[serde(rename = "passedProblem")]
    pub passed_problem: Option<ProblemStats>,

    /// Statistics over the submitted-problems list, when the payload has one
    #[serde(rename = "submittedProblem")]
    pub submitted_problem: Option<ProblemStats>,
}

/// Identity block of a summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Caller-supplied user id; the payload's own uid field is not trusted
    pub uid: u64,

    pub name: String,

    /// Avatar image URL
    pub avatar: String,

    pub slogan: String,

    /// Badge text, null for users without one
    pub badge: Option<String>,
}
