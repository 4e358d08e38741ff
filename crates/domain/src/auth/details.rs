//! Access token with expiry metadata.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::response::TokenResponseBody;

/// An acquired OAuth2 token together with everything needed to decide when
/// it must be replaced.
///
/// Instances are immutable; a refresh or re-acquisition produces a new
/// value that replaces the cached one atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDetails {
    /// The bearer credential itself.
    pub access_token: String,
    /// Token type reported by the server (usually "Bearer").
    pub token_type: Option<String>,
    /// Instant at which the token stops being usable, if the server
    /// reported a lifetime. `None` means the token never expires locally.
    pub expires_at: Option<DateTime<Utc>>,
    /// Credential for obtaining a replacement without re-authenticating.
    pub refresh_token: Option<String>,
    /// Scopes granted by this token.
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl AccessDetails {
    /// Builds access details from a token endpoint response body.
    ///
    /// The expiry instant is `obtained_at + expires_in`; an `expires_in`
    /// of zero or less therefore produces a token that is already expired
    /// when stored and gets refreshed on the next access.
    #[must_use]
    pub fn from_response(body: TokenResponseBody, obtained_at: DateTime<Utc>) -> Self {
        let expires_at = body
            .expires_in
            .map(|secs| obtained_at + Duration::seconds(secs));

        let scopes = body
            .scope
            .map(|scope| scope.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        Self {
            access_token: body.access_token,
            token_type: body.token_type,
            expires_at,
            refresh_token: body.refresh_token,
            scopes,
        }
    }

    /// Whether the token is still usable at `now`.
    ///
    /// `margin_secs` widens the expiry window: a token within that many
    /// seconds of expiring counts as expired. Zero keeps the exact
    /// `now < expires_at` rule.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, margin_secs: i64) -> bool {
        self.expires_at
            .is_none_or(|expires_at| now + Duration::seconds(margin_secs) < expires_at)
    }

    /// Whether a replacement can be obtained without re-authenticating.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Returns the Authorization header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let token_type = self.token_type.as_deref().unwrap_or("Bearer");
        format!("{token_type} {}", self.access_token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(expires_in: Option<i64>) -> TokenResponseBody {
        TokenResponseBody {
            access_token: "access123".to_string(),
            token_type: Some("Bearer".to_string()),
            expires_in,
            refresh_token: Some("refresh456".to_string()),
            scope: None,
        }
    }

    #[test]
    fn test_expiry_derived_from_acquisition_instant() {
        let obtained_at = Utc::now();
        let details = AccessDetails::from_response(body(Some(3600)), obtained_at);

        assert_eq!(
            details.expires_at,
            Some(obtained_at + Duration::seconds(3600))
        );
        assert!(details.is_fresh(obtained_at, 0));
    }

    #[test]
    fn test_negative_expires_in_is_born_expired() {
        let obtained_at = Utc::now();
        let details = AccessDetails::from_response(body(Some(-60)), obtained_at);

        assert!(!details.is_fresh(obtained_at, 0));
    }

    #[test]
    fn test_zero_expires_in_is_born_expired() {
        let obtained_at = Utc::now();
        let details = AccessDetails::from_response(body(Some(0)), obtained_at);

        assert!(!details.is_fresh(obtained_at, 0));
    }

    #[test]
    fn test_missing_expires_in_never_expires() {
        let obtained_at = Utc::now();
        let details = AccessDetails::from_response(body(None), obtained_at);

        assert_eq!(details.expires_at, None);
        assert!(details.is_fresh(obtained_at + Duration::days(365), 0));
    }

    #[test]
    fn test_margin_widens_the_expiry_window() {
        let obtained_at = Utc::now();
        let details = AccessDetails::from_response(body(Some(30)), obtained_at);

        assert!(details.is_fresh(obtained_at, 0));
        assert!(!details.is_fresh(obtained_at, 30));
    }

    #[test]
    fn test_authorization_header_defaults_to_bearer() {
        let mut response = body(None);
        response.token_type = None;
        let details = AccessDetails::from_response(response, Utc::now());

        assert_eq!(details.authorization_header(), "Bearer access123");
    }

    #[test]
    fn test_scope_string_is_split() {
        let mut response = body(None);
        response.scope = Some("read write".to_string());
        let details = AccessDetails::from_response(response, Utc::now());

        assert_eq!(details.scopes, vec!["read", "write"]);
    }
}
