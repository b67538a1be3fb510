//! Line Merger: coalesces runs of non-blank lines into multi-line messages.
//!
//! A blank line flushes the accumulation buffer as one message; consecutive
//! blanks are absorbed. This reassembles multi-line log entries (stack
//! traces, pretty-printed JSON) that are separated by blank lines in the
//! source stream, while single-line logs remain one-to-one.
//!
//! The merger only runs when `--merge-lines` is set; otherwise every raw
//! line, blank ones included, passes through as its own message.

/// Merges runs of non-blank lines, joined with `\n`, into single messages.
///
/// A non-empty buffer at end of stream is flushed as a final message; no
/// trailing blank line is required to terminate the last message.
#[must_use]
pub fn merge(lines: Vec<String>) -> Vec<String> {
    let mut messages = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for line in lines {
        if line.is_empty() {
            if !buffer.is_empty() {
                messages.push(buffer.join("\n"));
                buffer.clear();
            }
        } else {
            buffer.push(line);
        }
    }

    if !buffer.is_empty() {
        messages.push(buffer.join("\n"));
    }

    messages
}
