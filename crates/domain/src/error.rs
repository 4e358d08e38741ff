//! Domain error types

use thiserror::Error;

/// Connectivity or I/O failure raised by the transport before any HTTP
/// status is available.
///
/// The message is carried verbatim so that callers inspecting the cause of
/// a wrapped [`TokenError::Transport`] see the transport's own description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates a transport error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The transport's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while validating configuration or exchanging tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token request never produced an HTTP status.
    #[error("OAuth2 access token request failed")]
    Transport {
        /// The underlying connectivity failure.
        #[source]
        source: TransportError,
    },

    /// The authorization server answered with a non-success status.
    /// The response body is logged at the call site, never carried here.
    #[error("OAuth2 access token request failed [HTTP {status}]")]
    Server {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The authorization server answered 2xx but the body did not contain
    /// a usable access token.
    #[error("OAuth2 access token response could not be parsed: {message}")]
    MalformedResponse {
        /// Parser description of what was wrong with the body.
        message: String,
    },

    /// The cached token expired and carries no refresh token.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The grant type and credential fields do not form a usable
    /// configuration. Raised at validation time, before any network call.
    #[error("invalid OAuth2 configuration: {message}")]
    Configuration {
        /// What is missing or inconsistent.
        message: String,
    },

    /// The provider was disabled and no longer serves tokens.
    #[error("access token provider is disabled")]
    Disabled,
}

impl TokenError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_transport_error_wrapping() {
        let error = TokenError::Transport {
            source: TransportError::new("connection reset"),
        };

        assert_eq!(error.to_string(), "OAuth2 access token request failed");
        assert_eq!(error.source().unwrap().to_string(), "connection reset");
    }

    #[test]
    fn test_server_error_message_contains_status_only() {
        let error = TokenError::Server { status: 503 };

        assert_eq!(
            error.to_string(),
            "OAuth2 access token request failed [HTTP 503]"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_configuration_error_message() {
        let error = TokenError::configuration("client id is required");
        assert_eq!(
            error.to_string(),
            "invalid OAuth2 configuration: client id is required"
        );
    }
}
