use async_trait::async_trait;
use reqwest::{Client, Url, redirect};
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

use super::attempt::FailureKind;
use super::config::{Credentials, ProbeConfig};

/// Status line and body text of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// A request that produced no usable HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

/// Sends one login request and waits for the full response.
#[async_trait]
pub trait LoginTransport: Send + Sync {
    async fn send_login(
        &self,
        url: &Url,
        credentials: &Credentials,
    ) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport; one client reused for the whole run.
///
/// Redirects are not followed, so a 3xx from the login route is reported as is.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client for a run.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(config: &ProbeConfig) -> AppResult<Self> {
        let mut client_builder = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .redirect(redirect::Policy::none());
        if let Some(timeout) = config.request_timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LoginTransport for HttpTransport {
    async fn send_login(
        &self,
        url: &Url,
        credentials: &Credentials,
    ) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(url.clone())
            .json(credentials)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| transport_error(&err))?;
        debug!("Received {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}

fn transport_error(err: &reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Other
    };
    TransportError {
        kind,
        message: error_chain(err),
    }
}

/// reqwest's top-level message hides the cause ("error sending request"),
/// so the source chain is appended.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
