//! Types for the fetched profile payload.

/// Raw decoded payload of `/user/{uid}?_contentOnly=1`
///
/// We keep this as `serde_json::Value` because the site ships a large and
/// occasionally changing envelope around the handful of fields we consume.
/// The reshaper validates the fields it actually reads.
pub type RawUserData = serde_json::Value;
