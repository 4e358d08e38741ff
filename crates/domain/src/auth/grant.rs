//! Grant configuration and token request form building.

use serde::{Deserialize, Serialize};

/// The credential set used to obtain tokens, one variant per supported
/// OAuth2 grant.
///
/// The variant also acts as the request-building strategy: it knows which
/// form fields a full acquisition and a refresh must carry. Building is
/// pure; the transport owns encoding and delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GrantConfig {
    /// Resource owner password credentials grant. Client credentials are
    /// optional and, when present, are sent along with every request.
    ResourceOwnerPasswordCredentials {
        /// Resource owner username.
        username: String,
        /// Resource owner password.
        password: String,
        /// Client ID registered with the authorization server.
        client_id: Option<String>,
        /// Client secret paired with the client ID.
        client_secret: Option<String>,
    },
    /// Client credentials grant.
    ClientCredentials {
        /// Client ID registered with the authorization server.
        client_id: String,
        /// Client secret paired with the client ID.
        client_secret: String,
    },
    /// Refresh token grant: the initial acquisition already exchanges a
    /// long-lived refresh token.
    RefreshToken {
        /// The pre-provisioned refresh token.
        refresh_token: String,
    },
}

impl GrantConfig {
    /// Form fields for a full token acquisition with this grant.
    #[must_use]
    pub fn acquisition_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ResourceOwnerPasswordCredentials {
                username,
                password,
                client_id,
                client_secret,
            } => {
                let mut params = vec![
                    ("grant_type", "password".to_string()),
                    ("username", username.clone()),
                    ("password", password.clone()),
                ];
                push_client_credentials(&mut params, client_id.as_deref(), client_secret.as_deref());
                params
            }
            Self::ClientCredentials {
                client_id,
                client_secret,
            } => vec![
                ("grant_type", "client_credentials".to_string()),
                ("client_id", client_id.clone()),
                ("client_secret", client_secret.clone()),
            ],
            Self::RefreshToken { refresh_token } => vec![
                ("grant_type", "refresh_token".to_string()),
                ("refresh_token", refresh_token.clone()),
            ],
        }
    }

    /// Form fields for refreshing a previously acquired token.
    ///
    /// The refresh request always uses the `refresh_token` grant type,
    /// whatever grant produced the original token. Client credentials are
    /// included when this grant carries them.
    #[must_use]
    pub fn refresh_params(&self, refresh_token: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", refresh_token.to_string()),
        ];

        match self {
            Self::ResourceOwnerPasswordCredentials {
                client_id,
                client_secret,
                ..
            } => {
                push_client_credentials(&mut params, client_id.as_deref(), client_secret.as_deref());
            }
            Self::ClientCredentials {
                client_id,
                client_secret,
            } => {
                push_client_credentials(
                    &mut params,
                    Some(client_id.as_str()),
                    Some(client_secret.as_str()),
                );
            }
            Self::RefreshToken { .. } => {}
        }

        params
    }
}

fn push_client_credentials(
    params: &mut Vec<(&'static str, String)>,
    client_id: Option<&str>,
    client_secret: Option<&str>,
) {
    if let (Some(id), Some(secret)) = (client_id, client_secret) {
        params.push(("client_id", id.to_string()));
        params.push(("client_secret", secret.to_string()));
    }
}
