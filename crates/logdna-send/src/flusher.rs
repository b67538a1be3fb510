//! Transport Adapter: serializes the record batch and submits it in one
//! HTTP POST to the ingestion endpoint.
//!
//! The adapter's contract with the pipeline is ordered records in,
//! success or failure out. There is no retry; the calling scheduler owns
//! re-invocation policy.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::debug;

use crate::error::SendError;
use crate::hostname;
use crate::pipeline::record::LogRecord;

const FLUSH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct IngestBody<'a> {
    lines: &'a [LogRecord],
}

/// Submits one batched request to a LogDNA ingestion endpoint.
pub struct Flusher {
    client: reqwest::Client,
    endpoint: String,
    ingestion_key: String,
}

impl Flusher {
    #[must_use]
    pub fn new(endpoint: String, ingestion_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FLUSH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Flusher {
            client,
            endpoint,
            ingestion_key,
        }
    }

    /// Serializes the records as `{"lines": [...]}` and POSTs them.
    ///
    /// Query parameters carry the local hostname and the Unix timestamp of
    /// the request; the ingestion key is sent as a basic-auth username with
    /// an empty password. Any non-success status is surfaced as
    /// [`SendError::Rejected`].
    pub async fn flush(&self, records: &[LogRecord]) -> Result<(), SendError> {
        let body = serde_json::to_vec(&IngestBody { lines: records })?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        debug!(
            "posting {} records ({} bytes) to {}",
            records.len(),
            body.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("hostname", hostname::get_hostname()),
                ("now", now.to_string()),
            ])
            .basic_auth(&self.ingestion_key, Some(""))
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected { status, body });
        }

        Ok(())
    }
}
