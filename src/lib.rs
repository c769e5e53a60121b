//! Core library for the `ratecheck` CLI.
//!
//! `ratecheck` replays one fixed login request against a local API, strictly
//! one request at a time with a pause in between, and prints every response
//! so an operator can see when (and whether) the server starts rate limiting.
//! The library exposes the probe driver, its transport seam and the record
//! reporters so the loop can be exercised against scripted servers.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod probe;
pub mod report;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
