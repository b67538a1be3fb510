//! # logdna-send
//!
//! Single-shot log forwarder: reads lines from files or standard input,
//! optionally merges consecutive non-blank lines into multi-line messages,
//! bounds the batch to a payload size budget, and submits it as one HTTP
//! request to the LogDNA ingestion API. Meant to be invoked once per run by
//! a scheduler or log-rotation hook, not to run as a daemon.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//!   Reader → Merger → Bounder → Record Builder → Flusher
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod config;
pub mod error;
pub mod flusher;
pub mod hostname;
pub mod pipeline;

use tracing::debug;

use crate::config::Config;
use crate::error::{RunOutcome, SendError};
use crate::flusher::Flusher;
use crate::pipeline::{bounder, merger, reader, record};

/// Runs the whole pipeline once: read, merge, bound, build, flush.
///
/// Returns [`RunOutcome::NothingToSend`] without issuing a request when the
/// pipeline produces zero messages. Every error is terminal for the run.
pub async fn run(config: &Config) -> Result<RunOutcome, SendError> {
    let lines = reader::read_lines(&config.inputs)?;
    debug!("read {} raw lines", lines.len());

    let messages = if config.merge_lines {
        merger::merge(lines)
    } else {
        lines
    };

    if messages.is_empty() {
        return Ok(RunOutcome::NothingToSend);
    }

    let messages = bounder::bound(messages);
    let records = record::build_records(messages, config);

    let flusher = Flusher::new(config.ingest_url.clone(), config.ingestion_key.clone());
    flusher.flush(&records).await?;

    Ok(RunOutcome::Sent(records.len()))
}
