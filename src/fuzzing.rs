use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{ProbeArgs, parsers::parse_duration_arg};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult};
use crate::probe::ResponseBody;

thread_local! {
    static BASE_MATCHES: ArgMatches = ProbeArgs::command().get_matches_from(["ratecheck"]);
}

/// Parses a duration argument (e.g. `200ms`, `1s`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input).map_err(AppError::from)
}

/// Parses a TOML config and applies it on top of default arguments.
///
/// # Errors
///
/// Returns an error when the TOML is invalid or a value fails validation.
pub fn apply_config_from_toml(input: &str) -> AppResult<ProbeArgs> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(crate::error::ConfigError::ParseToml {
            path: "fuzz.toml".into(),
            source: err,
        })
    })?;
    BASE_MATCHES.with(|matches| {
        let mut args = ProbeArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, &config)?;
        Ok(args)
    })
}

/// Classifies an arbitrary response body the way the driver does.
#[must_use]
pub fn parse_response_body_input(input: &str) -> ResponseBody {
    ResponseBody::parse(input.to_owned())
}
