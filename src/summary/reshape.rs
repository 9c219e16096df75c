//! Reshaping of a fetched profile payload into a [`UserSummary`].
//!
//! The payload is navigated as an opaque `serde_json::Value`: the site's
//! envelope carries far more than we consume, and only the fields we read
//! or redact are validated.

use super::schema::{UserInfo, UserSummary};
use crate::client::RawUserData;
use crate::stats::{aggregate, ProblemRecord, ProblemStats};
use crate::utils::error::ReshapeError;
use log::debug;
use serde_json::{Map, Value};

/// Fields stripped from the passed-through user object. They are either
/// already surfaced via `info`/`elo`/problem stats or considered private
/// page furniture not worth persisting.
pub const REDACTED_KEYS: [&str; 14] = [
    "passedProblemCount",
    "submittedProblemCount",
    "elo",
    "eloValue",
    "badge",
    "slogan",
    "avatar",
    "isRoot",
    "blogAddress",
    "prize",
    "background",
    "introduction",
    "uid",
    "name",
];

/// Reshape one fetched payload into a summary
///
/// **Public** - main entry point for profile reshaping
///
/// Pure transformation: no network or disk access, and the payload itself is
/// never mutated. `uid` is the caller-supplied identifier and overrides
/// whatever the payload claims.
///
/// # Errors
/// `ReshapeError::MissingField` / `ReshapeError::WrongType` if the payload
/// lacks the user object, any of the five required info fields, or the elo
/// ceiling. Absent problem lists are not errors; a present list with records
/// outside the fixed categories fails via `ReshapeError::Stats`.
pub fn reshape(payload: &RawUserData, uid: u64) -> Result<UserSummary, ReshapeError> {
    let current = payload
        .get("currentData")
        .ok_or_else(|| missing("currentData"))?;

    let user_obj = current
        .get("user")
        .ok_or_else(|| missing("currentData.user"))?
        .as_object()
        .ok_or_else(|| wrong_type("currentData.user"))?;

    // info is read from the original object below, so the redaction works
    // on a structural copy rather than an alias
    let user = redact_user(user_obj);

    let info = UserInfo {
        uid,
        name: require_string(user_obj, "name")?,
        avatar: require_string(user_obj, "avatar")?,
        slogan: require_string(user_obj, "slogan")?,
        badge: require_nullable_string(user_obj, "badge")?,
    };

    let elo = current
        .get("eloMax")
        .cloned()
        .ok_or_else(|| missing("currentData.eloMax"))?;

    // The two lists are independently optional
    let passed_problem = optional_problem_stats(current, "passedProblems")?;
    let submitted_problem = optional_problem_stats(current, "submittedProblems")?;

    debug!(
        "Reshaped uid {}: passed={}, submitted={}",
        uid,
        passed_problem.as_ref().map_or(0, |s| s.count),
        submitted_problem.as_ref().map_or(0, |s| s.count)
    );

    Ok(UserSummary {
        info,
        user,
        elo,
        passed_problem,
        submitted_problem,
    })
}

/// Copy the user object and strip the redacted key set
fn redact_user(user_obj: &Map<String, Value>) -> Map<String, Value> {
    let mut user = user_obj.clone();
    for key in REDACTED_KEYS {
        user.remove(key);
    }
    user
}

/// Aggregate a problem list if the payload carries one; absent or null
/// lists yield `None`
fn optional_problem_stats(
    current: &Value,
    key: &str,
) -> Result<Option<ProblemStats>, ReshapeError> {
    match current.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(list) => {
            let records: Vec<ProblemRecord> = serde_json::from_value(list.clone())?;
            Ok(Some(aggregate(&records)?))
        }
    }
}

fn require_string(user_obj: &Map<String, Value>, key: &str) -> Result<String, ReshapeError> {
    let value = user_obj.get(key).ok_or_else(|| missing_user_field(key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(&format!("currentData.user.{}", key)))
}

fn require_nullable_string(
    user_obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, ReshapeError> {
    match user_obj.get(key).ok_or_else(|| missing_user_field(key))? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(wrong_type(&format!("currentData.user.{}", key))),
    }
}

fn missing(path: &str) -> ReshapeError {
    ReshapeError::MissingField(path.to_string())
}

fn missing_user_field(key: &str) -> ReshapeError {
    ReshapeError::MissingField(format!("currentData.user.{}", key))
}

fn wrong_type(path: &str) -> ReshapeError {
    ReshapeError::WrongType(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> RawUserData {
        json!({
            "currentData": {
                "user": {
                    "uid": 999999,
                    "name": "chen",
                    "avatar": "https://cdn.example/avatar/3.png",
                    "slogan": "keep going",
                    "badge": null,
                    "ccfLevel": 5,
                    "isRoot": false,
                    "introduction": "hi",
                    "elo": 1500
                },
                "eloMax": { "rating": 1712, "time": 1700000000 },
                "passedProblems": [
                    { "pid": "P1001", "type": "P", "difficulty": 1 },
                    { "pid": "AT100", "type": "AT", "difficulty": 2 }
                ]
            }
        })
    }

    #[test]
    fn test_reshape_basic() {
        let summary = reshape(&payload(), 250374).unwrap();

        // caller-supplied uid wins over the payload's
        assert_eq!(summary.info.uid, 250374);
        assert_eq!(summary.info.name, "chen");
        assert_eq!(summary.info.badge, None);
        assert_eq!(summary.elo["rating"], 1712);
        assert_eq!(summary.passed_problem.unwrap().count, 2);
        assert!(summary.submitted_problem.is_none());
    }

    #[test]
    fn test_redaction_strips_fixed_keys() {
        let summary = reshape(&payload(), 1).unwrap();

        for key in REDACTED_KEYS {
            assert!(!summary.user.contains_key(key), "{} not redacted", key);
        }
        // untouched fields pass through
        assert_eq!(summary.user["ccfLevel"], 5);
    }

    #[test]
    fn test_redaction_does_not_mutate_payload() {
        let data = payload();
        let before = data.clone();

        reshape(&data, 1).unwrap();

        assert_eq!(data, before);
    }

    #[test]
    fn test_missing_user_object() {
        let data = json!({ "currentData": {} });
        assert!(matches!(
            reshape(&data, 1),
            Err(ReshapeError::MissingField(path)) if path == "currentData.user"
        ));
    }

    #[test]
    fn test_missing_elo_ceiling() {
        let mut data = payload();
        data["currentData"]
            .as_object_mut()
            .unwrap()
            .remove("eloMax");

        assert!(matches!(
            reshape(&data, 1),
            Err(ReshapeError::MissingField(path)) if path == "currentData.eloMax"
        ));
    }

    #[test]
    fn test_wrong_typed_name() {
        let mut data = payload();
        data["currentData"]["user"]["name"] = json!(42);

        assert!(matches!(reshape(&data, 1), Err(ReshapeError::WrongType(_))));
    }

    #[test]
    fn test_null_problem_list_treated_as_absent() {
        let mut data = payload();
        data["currentData"]["passedProblems"] = Value::Null;

        let summary = reshape(&data, 1).unwrap();
        assert!(summary.passed_problem.is_none());
    }

    #[test]
    fn test_unknown_category_propagates() {
        let mut data = payload();
        data["currentData"]["passedProblems"] = json!([
            { "pid": "X1", "type": "XJOI", "difficulty": 1 }
        ]);

        assert!(matches!(reshape(&data, 1), Err(ReshapeError::Stats(_))));
    }
}
