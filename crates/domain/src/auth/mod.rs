//! OAuth2 token lifecycle types.
//!
//! This module provides:
//! - Grant configuration and the form parameters each grant produces
//! - The access token with its derived expiry instant
//! - The token endpoint response wire model
//! - Settings parsing and validation

mod details;
mod grant;
mod response;
mod settings;

pub use details::AccessDetails;
pub use grant::GrantConfig;
pub use response::TokenResponseBody;
pub use settings::{GrantType, ProviderConfig, ProviderSettings};
