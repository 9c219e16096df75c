//! HTTP client for fetching the embedded JSON of a user profile page.

pub mod types;

pub use types::RawUserData;

use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, USER_AGENT};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Client bound to one base URL of the remote site
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// Fetch the decoded profile payload for one user
    ///
    /// # Errors
    /// `FetchError::HttpStatus` on a non-success status,
    /// `FetchError::RequestFailed` on transport errors or malformed JSON.
    pub fn fetch_user(&self, uid: u64) -> Result<RawUserData, FetchError> {
        let url = self.user_url(uid);

        info!("Fetching profile data from: {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let data: RawUserData = response.json().map_err(FetchError::RequestFailed)?;

        debug!("Payload for uid {} decoded", uid);

        Ok(data)
    }

    /// Profile-page URL with the content-only switch that makes the site
    /// return bare JSON instead of HTML
    fn user_url(&self, uid: u64) -> String {
        format!("{}/user/{}?_contentOnly=1", self.base_url, uid)
    }
}

/// Strip a trailing slash so URL assembly never doubles it
fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://www.luogu.com/".to_string()),
            "https://www.luogu.com"
        );
        assert_eq!(
            normalize_base_url("https://www.luogu.com".to_string()),
            "https://www.luogu.com"
        );
    }

    #[test]
    fn test_user_url() {
        let client = ProfileClient::new("https://www.luogu.com.cn/").unwrap();
        assert_eq!(
            client.user_url(250374),
            "https://www.luogu.com.cn/user/250374?_contentOnly=1"
        );
    }
}
