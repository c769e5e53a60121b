use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::report::AttemptReporter;

use super::attempt::{AttemptOutcome, LoginAttempt, ResponseBody};
use super::config::ProbeConfig;
use super::summary::RunSummary;
use super::transport::LoginTransport;

/// Sends `config.count` login requests one after another and reports each
/// outcome before the next request goes out.
///
/// The pause is taken after an attempt has been reported, so consecutive
/// sends are at least `config.delay` apart regardless of response latency.
/// Transport failures are reported like any other outcome and do not stop
/// the run.
///
/// # Errors
///
/// Returns an error only when the reporter cannot write its output.
pub async fn run_probe<T, R>(
    config: &ProbeConfig,
    transport: &T,
    reporter: &mut R,
) -> AppResult<RunSummary>
where
    T: LoginTransport + ?Sized,
    R: AttemptReporter + ?Sized,
{
    info!(
        "Probing {} with {} login attempts, {:?} apart",
        config.url, config.count, config.delay
    );
    let mut summary = RunSummary::default();

    for index in 0..config.count {
        let sent_at = Utc::now();
        let started = Instant::now();
        let outcome = match transport.send_login(&config.url, &config.credentials).await {
            Ok(response) => AttemptOutcome::Response {
                status: response.status,
                body: ResponseBody::parse(response.body),
            },
            Err(err) => {
                warn!("Attempt {} failed: {}: {}", index, err.kind, err.message);
                AttemptOutcome::TransportFailure {
                    kind: err.kind,
                    message: err.message,
                }
            }
        };
        let attempt = LoginAttempt {
            index,
            sent_at,
            elapsed: started.elapsed(),
            outcome,
        };
        debug!(
            "Attempt {} completed in {}ms with status {:?}",
            index,
            attempt.elapsed.as_millis(),
            attempt.outcome.status()
        );

        reporter.attempt(&attempt)?;
        if summary.record(&attempt) {
            info!("First rate-limited response at attempt {}", index);
        }

        if index.saturating_add(1) < config.count {
            tokio::time::sleep(config.delay).await;
        }
    }

    reporter.summary(&summary)?;
    Ok(summary)
}
