//! Token endpoint transport implementation using reqwest.
//!
//! This adapter implements the `TokenTransport` port. It posts the form
//! fields produced by the grant strategy and hands the raw status and
//! body back to the provider; it never interprets the response.

use async_trait::async_trait;
use reqwest::Client;

use gyre_application::{TokenRequest, TokenServerResponse, TokenTransport};
use gyre_domain::TransportError;

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token endpoint transport backed by `reqwest::Client`.
pub struct ReqwestTokenTransport {
    client: Client,
}

impl ReqwestTokenTransport {
    /// Creates a transport with default settings.
    ///
    /// Redirects are disabled: a token endpoint that redirects is treated
    /// as a failed exchange rather than silently followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Gyre/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|error| TransportError::new(error.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport around a custom client, for callers that
    /// configure TLS or timeouts themselves.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Encodes the form fields of a token request.
    fn encode_form(params: &[(&'static str, String)]) -> Result<String, TransportError> {
        serde_urlencoded::to_string(params)
            .map_err(|error| TransportError::new(format!("failed to encode form: {error}")))
    }
}

#[async_trait]
impl TokenTransport for ReqwestTokenTransport {
    async fn execute(&self, request: TokenRequest) -> Result<TokenServerResponse, TransportError> {
        let body = Self::encode_form(&request.params)?;

        let response = self
            .client
            .post(request.url.as_str())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|error| TransportError::new(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| {
            TransportError::new(format!("failed to read response body: {error}"))
        })?;

        Ok(TokenServerResponse::new(status, body))
    }
}
