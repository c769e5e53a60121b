//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::ProbeArgs;
pub use defaults::{DEFAULT_COUNT, DEFAULT_DELAY, DEFAULT_EMAIL, DEFAULT_PASSWORD, DEFAULT_URL};
pub use types::{OutputFormat, PositiveU64};

pub(crate) use defaults::DEFAULT_USER_AGENT;
