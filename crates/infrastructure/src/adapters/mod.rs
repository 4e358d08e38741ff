//! Port adapters

mod reqwest_transport;
mod system_clock;
mod tracing_log;

pub use reqwest_transport::ReqwestTokenTransport;
pub use system_clock::SystemClock;
pub use tracing_log::TracingLogger;
