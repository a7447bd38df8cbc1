use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};

mod agent;
mod cli;
mod config;
mod generate;
mod render;

use cli::Cli;
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel, verbose: bool) {
    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
        builder.target(env_logger::Target::Stderr).init();
        info!("Log level from RUST_LOG env");
        return;
    }

    let level = if verbose { log::LevelFilter::Debug } else { log_level.as_filter() };
    builder.filter_level(level);
    builder.target(env_logger::Target::Stderr).init();

    info!("Log level: {} (from {})", level, if verbose { "--verbose" } else { "config" });
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    if cli.check {
        let summary = generate::check(config)?;
        if !cli.quiet {
            println!("{} {} is up to date", "✓".green(), summary.output.display());
        }
        return Ok(());
    }

    let summary = generate::run(config)?;
    if !cli.quiet {
        println!(
            "{} Wrote {} agent cards to {}",
            "✓".green(),
            summary.agents.to_string().bold(),
            summary.output.display()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Config picks the log level, so its outcome is logged once logging is up
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let mut config = loaded.config;
    cli.apply_overrides(&mut config);

    setup_logging(config.log_level, cli.verbose);

    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    match loaded.source {
        Some(ref path) => info!("Loaded config from: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    info!("Starting agent-cards with root {}", config.root_dir().display());

    run(&cli, &config).context("Generation failed")?;

    Ok(())
}
