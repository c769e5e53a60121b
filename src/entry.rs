//! Process entry: arguments, logging, config, runtime.
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{info, warn};

use crate::args::ProbeArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::probe::{HttpTransport, ProbeConfig, run_probe};
use crate::report::StreamReporter;

/// Runs the probe described by the process arguments and any config file.
///
/// # Errors
///
/// Returns an error for invalid arguments or config, when the HTTP client
/// cannot be built, or when stdout cannot be written.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }
    let config = ProbeConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args, &config))
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: &ProbeArgs, config: &ProbeConfig) -> AppResult<()> {
    let transport = HttpTransport::new(config)?;
    let stdout = std::io::stdout();
    let mut reporter = StreamReporter::new(stdout.lock(), args.output_format, !args.no_summary);

    let summary = run_probe(config, &transport, &mut reporter).await?;

    if summary.transport_failures > 0 {
        warn!(
            "{} of {} attempts got no response from {}",
            summary.transport_failures, summary.attempts, config.url
        );
    }
    match summary.first_rate_limited {
        Some(index) => info!("Rate limiting observed from attempt {}", index),
        None => info!("No rate-limited responses observed"),
    }
    Ok(())
}
