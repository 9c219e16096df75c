//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for profile page requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// International mirror, used unless `--cn` / `cn=true` is given
pub const BASE_URL_COM: &str = "https://www.luogu.com";

/// Mainland site
pub const BASE_URL_CN: &str = "https://www.luogu.com.cn";

// The site only serves the embedded page JSON to browser-looking clients
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Default directory for per-uid summary files written by the batch driver
pub const DEFAULT_OUT_DIR: &str = "data";

/// Select the base URL for the given mirror flag
pub fn base_url(cn: bool) -> &'static str {
    if cn {
        BASE_URL_CN
    } else {
        BASE_URL_COM
    }
}
