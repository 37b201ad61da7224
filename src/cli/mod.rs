//! CLI interface for lateline
//!
//! Provides subcommands for:
//! - `predict`: Predict a line time from an entry snapshot
//! - `settle`: Dry-run settlement of one entry in a snapshot
//! - `encode` / `decode`: Convert wagers to and from tokens
//! - `config`: Show configuration

mod predict;
mod settle;
mod snapshot;
mod token;

pub use predict::PredictArgs;
pub use settle::SettleArgs;
pub use snapshot::load_entries;
pub use token::{DecodeArgs, EncodeArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lateline")]
#[command(about = "Over/under lateness lines with pari-mutuel settlement")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the line time for a new entry
    Predict(PredictArgs),
    /// Settle an entry from a snapshot without writing anything back
    Settle(SettleArgs),
    /// Encode a wager as a token
    Encode(EncodeArgs),
    /// Decode a wager token
    Decode(DecodeArgs),
    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let cli = Cli::parse_from([
            "lateline", "encode", "--bettor", "bob", "--side", "over", "--stake", "30",
        ]);
        assert_eq!(cli.config, "config.toml");
        assert!(matches!(cli.command, Commands::Encode(_)));
    }

    #[test]
    fn test_parse_settle_with_config() {
        let cli = Cli::parse_from([
            "lateline",
            "-c",
            "other.toml",
            "settle",
            "--entries",
            "db.json",
            "--id",
            "6f1c1b9e-4a59-4e8c-9d1e-3f0b8f3f5a10",
        ]);
        assert_eq!(cli.config, "other.toml");
        assert!(matches!(cli.command, Commands::Settle(_)));
    }

    #[test]
    fn test_parse_rejects_bad_side() {
        let result = Cli::try_parse_from([
            "lateline", "encode", "--bettor", "bob", "--side", "sideways", "--stake", "1",
        ]);
        assert!(result.is_err());
    }
}
