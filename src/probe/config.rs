use std::time::Duration;

use reqwest::Url;
use serde::Serialize;

use crate::args::{DEFAULT_EMAIL, DEFAULT_PASSWORD, ProbeArgs};
use crate::error::{AppError, AppResult, ValidationError};

/// Login payload, identical for every attempt of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_owned(),
            password: DEFAULT_PASSWORD.to_owned(),
        }
    }
}

/// Everything a run needs, resolved once before the first request.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub url: Url,
    pub credentials: Credentials,
    pub count: u64,
    pub delay: Duration,
    pub request_timeout: Option<Duration>,
}

impl ProbeConfig {
    /// Builds the run configuration from parsed (and config-merged) arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed or not http/https.
    pub fn from_args(args: &ProbeArgs) -> AppResult<Self> {
        Ok(Self {
            url: parse_target_url(&args.url)?,
            credentials: Credentials {
                email: args.email.clone(),
                password: args.password.clone(),
            },
            count: u64::from(args.count),
            delay: args.delay,
            request_timeout: args.request_timeout,
        })
    }
}

fn parse_target_url(value: &str) -> AppResult<Url> {
    let url = Url::parse(value.trim()).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: value.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::validation(ValidationError::UnsupportedScheme {
            scheme: other.to_owned(),
        })),
    }
}
