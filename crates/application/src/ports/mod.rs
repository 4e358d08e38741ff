//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the token provider and external
//! systems. Each port is a trait that can be implemented by adapters in
//! the infrastructure layer, or by test doubles.

mod clock;
mod log;
mod transport;

pub use clock::Clock;
pub use log::Logger;
pub use transport::{TokenRequest, TokenServerResponse, TokenTransport};
