//! Sequential login probe: configuration, attempt records, transport and the
//! driver loop.
mod attempt;
mod config;
mod driver;
mod summary;
mod transport;


pub use attempt::{AttemptOutcome, FailureKind, LoginAttempt, ResponseBody};
pub use config::{Credentials, ProbeConfig};
pub use driver::run_probe;
pub use summary::RunSummary;
pub use transport::{HttpTransport, LoginTransport, RawResponse, TransportError};

/// Status code rate limiters answer with once the threshold is crossed.
pub const RATE_LIMITED_STATUS: u16 = 429;
