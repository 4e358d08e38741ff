//! Clock port for expiry computation

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Token expiry is decided against this clock, so tests can pin time by
/// providing their own implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
