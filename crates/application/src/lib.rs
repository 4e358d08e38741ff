//! Gyre Application - Token lifecycle orchestration
//!
//! This crate owns the access token provider: the cached token, the
//! acquire/refresh/fallback decisions, and the ports it drives to reach
//! the outside world.

pub mod ports;
pub mod provider;

pub use ports::{Clock, Logger, TokenRequest, TokenServerResponse, TokenTransport};
pub use provider::AccessTokenProvider;
