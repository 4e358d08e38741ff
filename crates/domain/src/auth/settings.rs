//! Provider settings parsing and validation.

use serde::{Deserialize, Serialize};
use url::Url;

use super::grant::GrantConfig;
use crate::error::{TokenError, TokenResult};

/// The OAuth2 flow used for the initial token acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GrantType {
    /// Exchange resource owner username/password for a token.
    #[default]
    ResourceOwnerPasswordCredentials,
    /// Authenticate as the client application itself.
    ClientCredentials,
    /// Exchange a pre-provisioned refresh token.
    RefreshToken,
}

/// Raw, not-yet-validated provider settings as read from the hosting
/// configuration surface.
///
/// All credential fields are optional here; which ones are required
/// depends on the grant type and is enforced by [`ProviderSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderSettings {
    /// Token endpoint of the authorization server.
    pub authorization_server_url: String,
    /// Grant used for the initial acquisition.
    #[serde(default)]
    pub grant_type: GrantType,
    /// Resource owner username (password grant).
    #[serde(default)]
    pub username: Option<String>,
    /// Resource owner password (password grant).
    #[serde(default)]
    pub password: Option<String>,
    /// Client ID (required for client-credentials, optional otherwise).
    #[serde(default)]
    pub client_id: Option<String>,
    /// Client secret (must accompany a client ID).
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Pre-provisioned refresh token (refresh-token grant).
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Seconds subtracted from a token's lifetime when deciding whether it
    /// is still usable. Zero keeps the exact expiry instant.
    #[serde(default)]
    pub expiry_margin_secs: i64,
}

/// Immutable, validated configuration consumed by the provider when it is
/// enabled. Produced once by [`ProviderSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Parsed token endpoint.
    pub authorization_server_url: Url,
    /// The credential set and request-building strategy.
    pub grant: GrantConfig,
    /// Expiry safety margin in seconds.
    pub expiry_margin_secs: i64,
}

impl ProviderSettings {
    /// Validates the settings and produces the immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Configuration`] when the URL does not parse
    /// or the credential fields do not match the grant type:
    /// - password grant requires username and password, and a client ID
    ///   only together with a client secret;
    /// - client-credentials requires both client ID and client secret;
    /// - refresh-token requires a refresh token.
    pub fn validate(&self) -> TokenResult<ProviderConfig> {
        let authorization_server_url = Url::parse(&self.authorization_server_url)
            .map_err(|error| {
                TokenError::configuration(format!(
                    "authorization server URL '{}' is not a valid URL: {error}",
                    self.authorization_server_url
                ))
            })?;

        let grant = self.grant_config()?;

        Ok(ProviderConfig {
            authorization_server_url,
            grant,
            expiry_margin_secs: self.expiry_margin_secs,
        })
    }

    /// Whether these settings form a usable configuration.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn grant_config(&self) -> TokenResult<GrantConfig> {
        match self.grant_type {
            GrantType::ResourceOwnerPasswordCredentials => {
                let username = require(self.username.as_ref(), "username")?;
                let password = require(self.password.as_ref(), "password")?;
                if self.client_id.is_some() != self.client_secret.is_some() {
                    return Err(TokenError::configuration(
                        "client id and client secret must be set together",
                    ));
                }
                Ok(GrantConfig::ResourceOwnerPasswordCredentials {
                    username,
                    password,
                    client_id: self.client_id.clone(),
                    client_secret: self.client_secret.clone(),
                })
            }
            GrantType::ClientCredentials => Ok(GrantConfig::ClientCredentials {
                client_id: require(self.client_id.as_ref(), "client id")?,
                client_secret: require(self.client_secret.as_ref(), "client secret")?,
            }),
            GrantType::RefreshToken => Ok(GrantConfig::RefreshToken {
                refresh_token: require(self.refresh_token.as_ref(), "refresh token")?,
            }),
        }
    }
}

fn require(value: Option<&String>, field: &str) -> TokenResult<String> {
    value
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| {
            TokenError::configuration(format!("{field} is required for this grant type"))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_settings(grant_type: GrantType) -> ProviderSettings {
        ProviderSettings {
            authorization_server_url: "http://unimportant".to_string(),
            grant_type,
            ..ProviderSettings::default()
        }
    }

    #[test]
    fn test_client_credentials_without_client_id_is_invalid() {
        let settings = base_settings(GrantType::ClientCredentials);

        assert!(!settings.is_valid());
    }

    #[test]
    fn test_client_credentials_with_id_and_secret_is_valid() {
        let settings = ProviderSettings {
            client_id: Some("clientId".to_string()),
            client_secret: Some("clientSecret".to_string()),
            ..base_settings(GrantType::ClientCredentials)
        };

        assert!(settings.is_valid());
        let config = settings.validate().unwrap();
        assert_eq!(
            config.grant,
            GrantConfig::ClientCredentials {
                client_id: "clientId".to_string(),
                client_secret: "clientSecret".to_string(),
            }
        );
    }

    #[test]
    fn test_password_grant_requires_username_and_password() {
        let mut settings = base_settings(GrantType::ResourceOwnerPasswordCredentials);
        assert!(!settings.is_valid());

        settings.username = Some("username".to_string());
        assert!(!settings.is_valid());

        settings.password = Some("password".to_string());
        assert!(settings.is_valid());
    }

    #[test]
    fn test_password_grant_rejects_client_id_without_secret() {
        let settings = ProviderSettings {
            username: Some("username".to_string()),
            password: Some("password".to_string()),
            client_id: Some("clientId".to_string()),
            ..base_settings(GrantType::ResourceOwnerPasswordCredentials)
        };

        assert!(!settings.is_valid());
    }

    #[test]
    fn test_refresh_token_grant_requires_refresh_token() {
        let mut settings = base_settings(GrantType::RefreshToken);
        assert!(!settings.is_valid());

        settings.refresh_token = Some("long-lived".to_string());
        assert!(settings.is_valid());
    }

    #[test]
    fn test_invalid_url_is_rejected_before_any_network_use() {
        let settings = ProviderSettings {
            authorization_server_url: "not a url".to_string(),
            username: Some("username".to_string()),
            password: Some("password".to_string()),
            ..ProviderSettings::default()
        };

        let error = settings.validate().unwrap_err();
        assert!(matches!(error, TokenError::Configuration { .. }));
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_empty_required_field_counts_as_missing() {
        let settings = ProviderSettings {
            username: Some(String::new()),
            password: Some("password".to_string()),
            ..base_settings(GrantType::ResourceOwnerPasswordCredentials)
        };

        assert!(!settings.is_valid());
    }

    #[test]
    fn test_grant_type_default_is_password_grant() {
        assert_eq!(
            GrantType::default(),
            GrantType::ResourceOwnerPasswordCredentials
        );
    }
}
