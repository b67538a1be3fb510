//! Error taxonomy for a run.
//!
//! Every failure is terminal for the run; there is no local recovery or
//! partial delivery. "Not configured" and "nothing to send" are modeled as
//! non-errors (`Option` at config construction and [`RunOutcome`]).

use reqwest::StatusCode;

/// Fatal errors that abort the run with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to reach ingestion endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ingestion endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Successful run outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// One batched request was submitted with this many records.
    Sent(usize),
    /// The pipeline produced zero messages; no request was issued.
    NothingToSend,
}
