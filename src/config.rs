//! Configuration types for lateline

use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Line prediction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Lateness assumed for subjects with no settled history (minutes)
    #[serde(default = "default_lateness_minutes")]
    pub default_lateness_minutes: Decimal,
}

/// Largest default lateness accepted from a config file: one week
pub const MAX_DEFAULT_LATENESS_MINUTES: Decimal = dec!(10080);

fn default_lateness_minutes() -> Decimal {
    dec!(5)
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            default_lateness_minutes: default_lateness_minutes(),
        }
    }
}

/// Account configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    /// Points granted to a newly opened account
    #[serde(default = "default_starting_balance")]
    pub starting_balance: u64,
}

fn default_starting_balance() -> u64 {
    100
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Serve Prometheus metrics on this port when set
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the crate cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        let minutes = self.predictor.default_lateness_minutes;
        anyhow::ensure!(
            minutes.abs() <= MAX_DEFAULT_LATENESS_MINUTES,
            "predictor.default_lateness_minutes = {} is outside +/-{}",
            minutes,
            MAX_DEFAULT_LATENESS_MINUTES
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [predictor]
            default_lateness_minutes = 7.5

            [accounts]
            starting_balance = 250

            [telemetry]
            log_level = "debug"
            log_format = "json"
            metrics_port = 9090
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.predictor.default_lateness_minutes, dec!(7.5));
        assert_eq!(config.accounts.starting_balance, 250);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.metrics_port, Some(9090));
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.predictor.default_lateness_minutes, dec!(5));
        assert_eq!(config.accounts.starting_balance, 100);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.metrics_port.is_none());
    }

    #[test]
    fn test_partial_section_defaults() {
        let toml = r#"
            [telemetry]
            log_level = "warn"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert_eq!(config.accounts.starting_balance, 100);
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let toml = r#"
            [telemetry]
            log_format = "xml"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[accounts]\nstarting_balance = 42").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.accounts.starting_balance, 42);
    }

    #[test]
    fn test_config_load_rejects_huge_default_lateness() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[predictor]\ndefault_lateness_minutes = 200000000000").unwrap();

        let result = Config::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut config = Config::default();
        config.predictor.default_lateness_minutes = dec!(-10080);
        assert!(config.validate().is_ok());
        config.predictor.default_lateness_minutes = dec!(10080.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}
