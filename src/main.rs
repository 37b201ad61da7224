use clap::Parser;
use lateline::cli::{Cli, Commands};
use lateline::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _telemetry = lateline::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Predict(args) => args.execute(&config)?,
        Commands::Settle(args) => args.execute()?,
        Commands::Encode(args) => args.execute()?,
        Commands::Decode(args) => args.execute()?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Predictor: default lateness {} min",
                config.predictor.default_lateness_minutes
            );
            println!(
                "  Accounts: starting balance {}",
                config.accounts.starting_balance
            );
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
