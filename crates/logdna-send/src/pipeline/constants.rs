//! Payload budget constants.
//!
//! The outbound payload size is *estimated* from these constants rather than
//! measured by serializing first. The per-message overhead covers the JSON
//! framing and metadata fields (`app`, `level`, `env`) wrapped around each
//! line; the fixed overhead covers the request envelope. Estimates are
//! deliberately conservative, not byte-accurate.

/// Maximum estimated payload size per request, in bytes.
///
/// Meeting or exceeding this estimate trips truncation in the bounder.
pub const MSG_SIZE_LIMIT: usize = 16 * 1024;

/// Estimated fixed overhead of one request envelope, in bytes.
pub const MSG_OVERHEAD_FIXED: usize = 250;

/// Estimated overhead per message within one request, in bytes.
pub const MSG_OVERHEAD_PER_LINE: usize = 80;

/// Sentinel message appended whenever the bounder truncates the batch.
pub const TRUNCATION_NOTICE: &str =
    "*** logdna-send MESSAGE SIZE LIMIT EXCEEDED, TRUNCATING! ***";
