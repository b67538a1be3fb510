//! Hostname detection for the outbound request's `hostname` query parameter.

use std::env;

use tracing::warn;

/// Get the local hostname.
///
/// Tries the `HOSTNAME` environment variable first (commonly set in
/// containers), then the system hostname, then falls back to `"unknown"`.
#[must_use]
pub fn get_hostname() -> String {
    if let Ok(hostname) = env::var("HOSTNAME") {
        if !hostname.is_empty() {
            return hostname;
        }
    }

    match nix::unistd::gethostname() {
        Ok(hostname_osstr) => {
            if let Some(hostname_str) = hostname_osstr.to_str() {
                if !hostname_str.is_empty() {
                    return hostname_str.to_string();
                }
            }
        }
        Err(e) => {
            warn!("Failed to get system hostname: {}", e);
        }
    }

    warn!("Could not determine hostname, using 'unknown'");
    "unknown".to_string()
}
