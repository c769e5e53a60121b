use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_EMAIL, DEFAULT_PASSWORD, DEFAULT_URL};
use super::parsers::{parse_duration_arg, parse_positive_u64};
use super::types::{OutputFormat, PositiveU64};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replays a fixed login request against a local API, one request at a time, to observe rate limiting.",
    next_help_heading = "Advanced Options"
)]
pub struct ProbeArgs {
    /// Login endpoint to probe
    #[arg(long, short, default_value = DEFAULT_URL, help_heading = "Common Options")]
    pub url: String,

    /// Email sent in every login payload
    #[arg(long, default_value = DEFAULT_EMAIL, help_heading = "Common Options")]
    pub email: String,

    /// Password sent in every login payload
    #[arg(long, default_value = DEFAULT_PASSWORD, help_heading = "Common Options")]
    pub password: String,

    /// Number of login attempts
    #[arg(
        long,
        short = 'n',
        default_value = "110",
        value_parser = parse_positive_u64,
        help_heading = "Common Options"
    )]
    pub count: PositiveU64,

    /// Pause after each attempt completes (e.g. 200ms, 1s)
    #[arg(
        long,
        short = 'd',
        default_value = "200ms",
        value_parser = parse_duration_arg,
        help_heading = "Common Options"
    )]
    pub delay: Duration,

    /// Per-request timeout (unset waits indefinitely)
    #[arg(long = "timeout", short = 't', value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Attempt record format on stdout
    #[arg(
        long = "output-format",
        short = 'o',
        default_value = "text",
        value_enum,
        ignore_case = true
    )]
    pub output_format: OutputFormat,

    /// Skip the status tally printed after the last attempt
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Path to config file (TOML/JSON). Defaults to ./ratecheck.toml or ./ratecheck.json if present.
    #[arg(long, short = 'c', help_heading = "Common Options")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by RATECHECK_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable color in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
