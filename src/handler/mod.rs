//! Edge-handler front end.
//!
//! Maps a request path and query string to a response body, mirroring the
//! worker deployment of this tool. The socket/server runtime itself is out
//! of scope; a deployment wraps [`handle_request`] and writes the fields of
//! [`HandlerResponse`] onto the wire.

use crate::client::ProfileClient;
use crate::summary::reshape;
use crate::utils::config;
use log::{error, info};
use serde_json::json;

/// Fixed body returned when no `uid` parameter is supplied
pub const PLACEHOLDER_BODY: &str =
    "Hello! Please provide a user ID via the 'uid' query parameter. (e.g., ?uid=250374)";

const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";
const CONTENT_TYPE_TEXT: &str = "text/plain;charset=UTF-8";

/// Wire-agnostic response of the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub content_type: &'static str,
    /// `Access-Control-Allow-Origin` value, set on JSON responses
    pub allow_origin: Option<&'static str>,
    pub body: String,
}

/// Parameters recognized in the query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub uid: Option<String>,
    /// `cn=true` selects the mainland base URL
    pub cn: bool,
}

/// Parse a raw query string (`k=v&k=v`, no percent decoding: both recognized
/// parameters are plain ASCII)
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::default();

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "uid" => params.uid = Some(value.to_string()),
            "cn" => params.cn = value == "true",
            _ => {}
        }
    }

    params
}

/// Handle one request
///
/// **Public** - entry point for deployments
///
/// `/favicon.ico` gets an empty 204; a request without `uid` gets the fixed
/// placeholder; otherwise the uid is fetched and reshaped, with failures
/// rendered as a 500 JSON error body.
pub fn handle_request(path: &str, query: &str) -> HandlerResponse {
    if path == "/favicon.ico" {
        return HandlerResponse {
            status: 204,
            content_type: CONTENT_TYPE_TEXT,
            allow_origin: None,
            body: String::new(),
        };
    }

    let params = parse_query(query);

    let Some(raw_uid) = params.uid else {
        return HandlerResponse {
            status: 200,
            content_type: CONTENT_TYPE_TEXT,
            allow_origin: None,
            body: PLACEHOLDER_BODY.to_string(),
        };
    };

    // Reject non-numeric ids before building a URL out of them
    let Ok(uid) = raw_uid.parse::<u64>() else {
        return error_response(400, format!("invalid uid parameter: {:?}", raw_uid));
    };

    info!("Fetching data for user {}...", uid);

    match fetch_summary_body(uid, params.cn) {
        Ok(body) => {
            info!("Data for user {} fetched successfully.", uid);
            HandlerResponse {
                status: 200,
                content_type: CONTENT_TYPE_JSON,
                allow_origin: Some("*"),
                body,
            }
        }
        Err(err) => {
            error!("Error fetching data for uid {}: {:#}", uid, err);
            error_response(500, format!("{:#}", err))
        }
    }
}

/// Fetch + reshape composition used by the success path
fn fetch_summary_body(uid: u64, cn: bool) -> anyhow::Result<String> {
    let client = ProfileClient::new(config::base_url(cn))?;
    let payload = client.fetch_user(uid)?;
    let summary = reshape(&payload, uid)?;
    Ok(serde_json::to_string_pretty(&summary)?)
}

fn error_response(status: u16, details: String) -> HandlerResponse {
    let body = json!({
        "error": "Failed to fetch user data.",
        "details": details,
    });

    HandlerResponse {
        status,
        content_type: CONTENT_TYPE_JSON,
        allow_origin: Some("*"),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_uid_and_cn() {
        let params = parse_query("uid=250374&cn=true");
        assert_eq!(params.uid.as_deref(), Some("250374"));
        assert!(params.cn);
    }

    #[test]
    fn test_parse_query_defaults() {
        assert_eq!(parse_query(""), QueryParams::default());
        // cn must be exactly "true"
        assert!(!parse_query("uid=1&cn=1").cn);
        // unknown parameters are ignored
        assert_eq!(parse_query("foo=bar").uid, None);
    }

    #[test]
    fn test_favicon_is_empty_204() {
        let response = handle_request("/favicon.ico", "");
        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_missing_uid_gets_placeholder() {
        let response = handle_request("/", "");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, PLACEHOLDER_BODY);
        assert_eq!(response.content_type, CONTENT_TYPE_TEXT);
    }

    #[test]
    fn test_non_numeric_uid_rejected() {
        let response = handle_request("/", "uid=abc");
        assert_eq!(response.status, 400);
        assert!(response.body.contains("invalid uid"));
    }
}
