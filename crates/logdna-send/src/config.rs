//! Configuration from command line arguments and environment variables.
//!
//! All configuration is resolved once at startup into an immutable [`Config`];
//! the pipeline itself never touches argv or the environment.

use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Default ingestion endpoint.
pub const DEFAULT_INGEST_URL: &str = "https://logs.logdna.com/logs/ingest";

const DEFAULT_ENV_TAG: &str = "unknown";

/// Command line surface.
///
/// Zero or more positional input sources (file paths, or `-` for stdin);
/// no positional arguments means stdin.
#[derive(Parser, Debug)]
#[command(name = "logdna-send", version, about = "Ship lines from files or stdin to LogDNA as one batched request")]
pub struct Cli {
    /// Severity label attached to every record (upper-cased before sending)
    #[arg(long, default_value = "INFO")]
    pub level: String,

    /// Application name attached to every record
    #[arg(long, default_value = "logdna-send")]
    pub app: String,

    /// Join successive non-blank lines into one message, using a blank line
    /// as the message separator
    #[arg(long)]
    pub merge_lines: bool,

    /// Input files; "-" or no arguments reads standard input
    pub inputs: Vec<String>,
}

/// A single ordered input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Resolved run configuration. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Config {
    pub level: String,
    pub app_name: String,
    pub env_tag: String,
    pub merge_lines: bool,
    pub inputs: Vec<InputSource>,
    pub ingestion_key: String,
    pub ingest_url: String,
}

impl Config {
    /// Builds the run configuration from parsed CLI arguments and the
    /// process environment.
    ///
    /// Returns `None` when `LOGDNA_INGESTION_KEY` is not set: the tool is
    /// considered unconfigured and the run is a silent no-op, not an error.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Option<Config> {
        let ingestion_key = env::var("LOGDNA_INGESTION_KEY")
            .ok()
            .filter(|key| !key.is_empty())?;

        let env_tag =
            env::var("SITENAME").unwrap_or_else(|_| DEFAULT_ENV_TAG.to_string());

        // Full endpoint override, primarily for integration tests.
        let ingest_url =
            env::var("LOGDNA_INGEST_URL").unwrap_or_else(|_| DEFAULT_INGEST_URL.to_string());

        let mut inputs: Vec<InputSource> = cli
            .inputs
            .iter()
            .map(|arg| {
                if arg == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(PathBuf::from(arg))
                }
            })
            .collect();
        if inputs.is_empty() {
            inputs.push(InputSource::Stdin);
        }

        Some(Config {
            level: cli.level,
            app_name: cli.app,
            env_tag,
            merge_lines: cli.merge_lines,
            inputs,
            ingestion_key,
            ingest_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("logdna-send").chain(args.iter().copied()))
    }

    #[test]
    #[serial]
    fn test_not_configured_without_ingestion_key() {
        env::remove_var("LOGDNA_INGESTION_KEY");
        assert!(Config::from_cli(cli(&[])).is_none());
    }

    #[test]
    #[serial]
    fn test_empty_ingestion_key_means_not_configured() {
        env::set_var("LOGDNA_INGESTION_KEY", "");
        assert!(Config::from_cli(cli(&[])).is_none());
        env::remove_var("LOGDNA_INGESTION_KEY");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        env::set_var("LOGDNA_INGESTION_KEY", "_not_a_real_key_");
        env::remove_var("SITENAME");
        env::remove_var("LOGDNA_INGEST_URL");

        let config = Config::from_cli(cli(&[])).unwrap();
        assert_eq!(config.level, "INFO");
        assert_eq!(config.app_name, "logdna-send");
        assert_eq!(config.env_tag, "unknown");
        assert!(!config.merge_lines);
        assert_eq!(config.inputs, vec![InputSource::Stdin]);
        assert_eq!(config.ingest_url, DEFAULT_INGEST_URL);

        env::remove_var("LOGDNA_INGESTION_KEY");
    }

    #[test]
    #[serial]
    fn test_options_and_env_tag() {
        env::set_var("LOGDNA_INGESTION_KEY", "_not_a_real_key_");
        env::set_var("SITENAME", "eu-west-1");

        let config = Config::from_cli(cli(&[
            "--level",
            "warn",
            "--app",
            "nightly-backup",
            "--merge-lines",
            "/var/log/backup.log",
        ]))
        .unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.app_name, "nightly-backup");
        assert_eq!(config.env_tag, "eu-west-1");
        assert!(config.merge_lines);
        assert_eq!(
            config.inputs,
            vec![InputSource::File(PathBuf::from("/var/log/backup.log"))]
        );

        env::remove_var("LOGDNA_INGESTION_KEY");
        env::remove_var("SITENAME");
    }

    #[test]
    #[serial]
    fn test_dash_is_stdin_and_order_is_preserved() {
        env::set_var("LOGDNA_INGESTION_KEY", "_not_a_real_key_");

        let config = Config::from_cli(cli(&["a.log", "-", "b.log"])).unwrap();
        assert_eq!(
            config.inputs,
            vec![
                InputSource::File(PathBuf::from("a.log")),
                InputSource::Stdin,
                InputSource::File(PathBuf::from("b.log")),
            ]
        );

        env::remove_var("LOGDNA_INGESTION_KEY");
    }
}
