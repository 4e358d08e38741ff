//! Access token provider: cached token, refresh, and fallback acquisition.

use std::sync::Arc;

use tokio::sync::Mutex;

use gyre_domain::{AccessDetails, ProviderConfig, TokenError, TokenResponseBody, TokenResult};

use crate::ports::{Clock, Logger, TokenRequest, TokenTransport};

/// Serves OAuth2 access tokens to outbound callers, acquiring and
/// refreshing them as needed behind a single accessor.
///
/// A token is fetched on first use and cached. Once it expires, the
/// provider first tries the stored refresh token; if that fails for any
/// reason the failure is logged at info level and a full acquisition with
/// the original grant runs instead. Only an error from that acquisition
/// (or from the very first one, which has nothing to fall back to)
/// reaches the caller.
///
/// The whole check-then-fetch path runs under one lock, so concurrent
/// callers hitting an expired token collapse onto a single in-flight
/// request and all observe its result. The cache is only written after a
/// fully successful response; a failed call leaves it untouched.
pub struct AccessTokenProvider {
    config: ProviderConfig,
    transport: Arc<dyn TokenTransport>,
    logger: Arc<dyn Logger>,
    clock: Arc<dyn Clock>,
    state: Mutex<CachedState>,
}

/// Cached token plus the lifecycle flag, guarded by the provider mutex.
#[derive(Debug, Default)]
struct CachedState {
    disabled: bool,
    current: Option<AccessDetails>,
}

impl AccessTokenProvider {
    /// Creates an enabled provider from a validated configuration.
    #[must_use]
    pub fn new(
        config: ProviderConfig,
        transport: Arc<dyn TokenTransport>,
        logger: Arc<dyn Logger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            transport,
            logger,
            clock,
            state: Mutex::new(CachedState::default()),
        }
    }

    /// Returns a usable access token, fetching or refreshing as needed.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the failed acquisition: a
    /// [`TokenError::Transport`] when the request never produced an HTTP
    /// status, a [`TokenError::Server`] for a non-success status, a
    /// [`TokenError::MalformedResponse`] for an unusable 2xx body, or
    /// [`TokenError::Disabled`] after [`Self::disable`]. A failed
    /// *refresh* never surfaces here; it is logged and recovered by the
    /// fallback acquisition.
    pub async fn access_details(&self) -> TokenResult<AccessDetails> {
        let mut state = self.state.lock().await;

        if state.disabled {
            return Err(TokenError::Disabled);
        }

        if let Some(current) = state.current.clone() {
            if current.is_fresh(self.clock.now(), self.config.expiry_margin_secs) {
                return Ok(current);
            }

            self.logger.debug("Refreshing access token");
            match self.refresh(&current).await {
                Ok(details) => {
                    state.current = Some(details.clone());
                    return Ok(details);
                }
                Err(refresh_error) => {
                    self.logger.info(
                        "Couldn't refresh access token",
                        Some(&refresh_error as &dyn std::error::Error),
                    );
                }
            }
        }

        let details = self.acquire().await?;
        state.current = Some(details.clone());
        Ok(details)
    }

    /// Disables the provider: the cached token is dropped and every
    /// further call is rejected.
    pub async fn disable(&self) {
        let mut state = self.state.lock().await;
        state.disabled = true;
        state.current = None;
    }

    async fn acquire(&self) -> TokenResult<AccessDetails> {
        self.logger.debug("Getting a new access token");
        self.request_token(self.config.grant.acquisition_params())
            .await
    }

    async fn refresh(&self, current: &AccessDetails) -> TokenResult<AccessDetails> {
        let refresh_token = current
            .refresh_token
            .as_deref()
            .ok_or(TokenError::MissingRefreshToken)?;

        self.request_token(self.config.grant.refresh_params(refresh_token))
            .await
    }

    async fn request_token(
        &self,
        params: Vec<(&'static str, String)>,
    ) -> TokenResult<AccessDetails> {
        let request = TokenRequest {
            url: self.config.authorization_server_url.clone(),
            params,
        };

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|source| TokenError::Transport { source })?;

        if !response.is_success() {
            self.logger.error(&format!(
                "OAuth2 access token request failed [HTTP {}], response:\n{}",
                response.status, response.body
            ));
            return Err(TokenError::Server {
                status: response.status,
            });
        }

        let body = TokenResponseBody::from_json(&response.body).map_err(|error| {
            TokenError::MalformedResponse {
                message: error.to_string(),
            }
        })?;

        Ok(AccessDetails::from_response(body, self.clock.now()))
    }
}
