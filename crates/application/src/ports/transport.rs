//! Token endpoint transport port

use async_trait::async_trait;
use url::Url;

use gyre_domain::TransportError;

/// A prepared token endpoint request.
///
/// The form fields come from the grant's request-building strategy; the
/// transport owns encoding and delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// Token endpoint to POST to.
    pub url: Url,
    /// Form fields, posted as `application/x-www-form-urlencoded`.
    pub params: Vec<(&'static str, String)>,
}

/// Raw result of a completed HTTP exchange with the token endpoint.
///
/// The transport reports every completed exchange, success or not;
/// interpreting the status is the provider's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenServerResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

impl TokenServerResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for executing token endpoint requests.
#[async_trait]
pub trait TokenTransport: Send + Sync {
    /// Executes the request and returns the server's response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only for connectivity or I/O
    /// failures; a non-success HTTP status is a normal response here.
    async fn execute(&self, request: TokenRequest) -> Result<TokenServerResponse, TransportError>;
}
