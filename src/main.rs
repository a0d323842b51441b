use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use term_deposit_rs::{BalanceRounding, CalculatorConfig, Session};

#[derive(Parser, Debug)]
#[clap(
    name = "term-deposit",
    author,
    version,
    about = "Term deposit maturity calculator"
)]
struct Cli {
    #[clap(long, short, help = "JSON configuration file")]
    config: Option<PathBuf>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(long, help = "Round the final balance to cents instead of whole units")]
    cents: bool,

    #[clap(long, help = "Give up after this many invalid answers to one question")]
    max_attempts: Option<u32>,

    #[clap(long, help = "Print the full quote as JSON after the final balance")]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::bank_compatible(),
    };

    if cli.cents {
        config = config.with_rounding(BalanceRounding::Cents);
    }
    if let Some(max_attempts) = cli.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let config = load_config(&cli)?;
    log::debug!("using config: {:?}", config);

    let session = Session::new(config);
    let stdin = io::stdin();
    let quote = session.run(stdin.lock(), io::stdout())?;

    if cli.json {
        println!("{}", quote.json());
    }

    Ok(())
}
