use std::time::Duration;

/// Login endpoint of the local API under observation.
pub const DEFAULT_URL: &str = "http://localhost:3000/api/users/login";
pub const DEFAULT_EMAIL: &str = "test@example.com";
pub const DEFAULT_PASSWORD: &str = "your_password";
/// Enough attempts to cross a 100-requests-per-window limiter.
pub const DEFAULT_COUNT: u64 = 110;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("ratecheck/", env!("CARGO_PKG_VERSION"));
