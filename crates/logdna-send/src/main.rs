#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use logdna_send::config::{Cli, Config};
use logdna_send::error::RunOutcome;

#[tokio::main]
async fn main() -> ExitCode {
    let log_level = env::var("LOGDNA_SEND_LOG")
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    let env_filter = format!("hyper=off,reqwest=off,rustls=off,{}", log_level);

    #[allow(clippy::expect_used)]
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(env_filter).expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();

    #[allow(clippy::expect_used)]
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    // Missing credential is a "not configured" no-op, not an error.
    let Some(config) = Config::from_cli(cli) else {
        debug!("LOGDNA_INGESTION_KEY not set, nothing to do");
        return ExitCode::SUCCESS;
    };

    match logdna_send::run(&config).await {
        Ok(RunOutcome::Sent(count)) => {
            debug!("shipped {count} records");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NothingToSend) => {
            debug!("no messages to send");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
