use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, ProbeArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Values given on the
/// command line are left untouched.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "email")
        && let Some(email) = config.email.clone()
    {
        args.email = email;
    }

    if !is_cli(matches, "password")
        && let Some(password) = config.password.clone()
    {
        args.password = password;
    }

    if !is_cli(matches, "count")
        && let Some(count) = config.count
    {
        args.count = PositiveU64::try_from(count).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "count",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay.as_ref()
    {
        args.delay = config_duration(delay, "delay")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(config_duration(timeout, "timeout")?);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "no_summary")
        && let Some(summary) = config.summary
    {
        args.no_summary = !summary;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn config_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}
