//! Payload Bounder: enforces the total-size budget on the outbound batch.
//!
//! Sizing works on a running estimate (see [`estimated_size`]) rather than
//! exact serialization. The check is meets-or-exceeds, and once tripped the
//! scan stops immediately; later messages are never evaluated, even short
//! ones. The bound is conservative and approximate, not a byte-accurate
//! guarantee on the wire payload.

use tracing::warn;

use super::constants::{
    MSG_OVERHEAD_FIXED, MSG_OVERHEAD_PER_LINE, MSG_SIZE_LIMIT, TRUNCATION_NOTICE,
};

/// Estimated contribution of one message to the serialized payload.
fn message_cost(message: &str) -> usize {
    message.len() + MSG_OVERHEAD_PER_LINE
}

/// Estimated serialized size of a whole batch, in bytes.
///
/// Fixed envelope overhead plus a per-message cost. This is the same
/// estimate the bounder accumulates while scanning; it exists as a named
/// function so the approximation stays visible and testable on its own.
#[must_use]
pub fn estimated_size(messages: &[String]) -> usize {
    MSG_OVERHEAD_FIXED + messages.iter().map(|m| message_cost(m)).sum::<usize>()
}

/// Truncates the batch so its estimated size stays under [`MSG_SIZE_LIMIT`].
///
/// Scans in order with a running estimate. On meeting or exceeding the limit
/// at message `i`:
/// - a batch of fewer than 2 messages is replaced by the first
///   `MSG_SIZE_LIMIT / 2` characters of its only message plus `...`, so a
///   usable fragment survives;
/// - otherwise the batch is cut to `[0, i)`, dropping the over-budget
///   message and everything after it.
///
/// Either way [`TRUNCATION_NOTICE`] is appended as a final message and
/// scanning stops. Under-budget input is returned unchanged.
#[must_use]
pub fn bound(mut messages: Vec<String>) -> Vec<String> {
    let mut estimate = MSG_OVERHEAD_FIXED;

    for i in 0..messages.len() {
        estimate += message_cost(&messages[i]);
        if estimate >= MSG_SIZE_LIMIT {
            if messages.len() < 2 {
                // Char-wise so the cut never lands inside a UTF-8 sequence.
                let fragment: String = messages[0].chars().take(MSG_SIZE_LIMIT / 2).collect();
                messages = vec![format!("{fragment}...")];
                warn!("single message exceeds size budget, keeping a fragment");
            } else {
                warn!(
                    "size budget exceeded at message {} of {}, dropping the rest",
                    i + 1,
                    messages.len()
                );
                messages.truncate(i);
            }
            messages.push(TRUNCATION_NOTICE.to_string());
            break;
        }
    }

    messages
}
