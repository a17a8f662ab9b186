//! Command-line interface parsing for the surfcast server
//!
//! Parses the listen port and refresh interval with clap and validates them
//! into a `StartupConfig`.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The refresh interval cannot be zero
    #[error("Invalid refresh interval: must be at least 1 second")]
    InvalidRefreshInterval,
}

/// Surf forecast API server for North Carolina beaches
#[derive(Parser, Debug)]
#[command(name = "surfcast")]
#[command(about = "Surf forecast API: weather, waves, and surf quality scores")]
#[command(version)]
pub struct Cli {
    /// Port to serve the HTTP API on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Seconds between forecast refresh cycles
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub refresh_interval: u64,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Delay between refresh cycles
    pub refresh_interval: Duration,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the refresh interval is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.refresh_interval == 0 {
            return Err(CliError::InvalidRefreshInterval);
        }
        Ok(StartupConfig {
            port: cli.port,
            refresh_interval: Duration::from_secs(cli.refresh_interval),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["surfcast"]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.refresh_interval, 300);
    }

    #[test]
    fn test_cli_parse_custom_port() {
        let cli = Cli::parse_from(["surfcast", "--port", "5099"]);
        assert_eq!(cli.port, 5099);
    }

    #[test]
    fn test_cli_parse_custom_interval() {
        let cli = Cli::parse_from(["surfcast", "--refresh-interval", "60"]);
        assert_eq!(cli.refresh_interval, 60);
    }

    #[test]
    fn test_startup_config_from_cli_defaults() {
        let cli = Cli::parse_from(["surfcast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
    }

    #[test]
    fn test_startup_config_rejects_zero_interval() {
        let cli = Cli::parse_from(["surfcast", "--refresh-interval", "0"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 1 second"));
    }
}
