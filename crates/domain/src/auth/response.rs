//! Token endpoint response wire model.

use serde::{Deserialize, Deserializer};

/// Successful response body of an OAuth2 token endpoint.
///
/// Only `access_token` is required. Authorization servers disagree on the
/// type of `expires_in` (RFC 6749 says number, plenty of servers send a
/// quoted string), so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponseBody {
    /// The bearer credential.
    pub access_token: String,
    /// Token type, usually "Bearer".
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds from the moment of acquisition.
    #[serde(default, deserialize_with = "seconds_from_number_or_string")]
    pub expires_in: Option<i64>,
    /// Refresh credential, when the server issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Space-separated granted scopes.
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponseBody {
    /// Parses a token endpoint response body.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the body is not valid JSON
    /// or lacks a usable `access_token`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn seconds_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(i64),
        Text(String),
    }

    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seconds::Number(seconds)) => Ok(Some(seconds)),
        Some(Seconds::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
