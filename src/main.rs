use anyhow::Result;
use clap::Parser;
use gambit::cli::{self, Cli, Commands};
use gambit::config::{AppConfig, LoggingConfig};
use gambit::error::GambitError;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, load_error) = match AppConfig::load_from(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!("Failed to load configuration: {e} - using defaults");
    }
    if let Err(errors) = config.validate() {
        for error in &errors {
            warn!("Invalid configuration: {error}");
        }
        return Err(GambitError::InvalidConfig(errors.join("; ")).into());
    }

    match &cli.command {
        Commands::FairValue {
            spread,
            favorite,
            underdog,
            threshold,
            ask,
        } => cli::run_fair_value(
            &config, *spread, *favorite, *underdog, *threshold, *ask, cli.json,
        ),
        Commands::Consistency { input } => cli::run_consistency(&config, input, cli.json),
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},gambit=debug", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
