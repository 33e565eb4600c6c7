//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the Quote-Harvest scraper.

use anyhow::Context;
use clap::Parser;
use quote_harvest::config::{load_config_with_hash, validate, CacheBackend, Config};
use quote_harvest::crawler::run_harvest;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Quote-Harvest: a paginated quote scraper
///
/// Walks every listing page of a quotes site, writes the quotes to CSV and,
/// with biographies enabled, writes one author row per quote to a second
/// `<name>_bio.<ext>` file.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version)]
#[command(about = "A paginated quote scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Quotes CSV path, overriding the configuration
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Resolve author biographies and write the author CSV
    #[arg(long)]
    bios: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(output) = &cli.output {
        config.output.quotes_path = output.display().to_string();
    }
    if cli.bios {
        config.scraper.fetch_bios = true;
    }
    validate(&config).context("Invalid configuration")?;

    setup_logging(cli.verbose, cli.quiet, Path::new(&config.output.log_path))?;

    match (&cli.config, &config_hash) {
        (Some(path), Some(hash)) => {
            tracing::info!("Configuration loaded from {} (hash: {})", path.display(), hash)
        }
        _ => tracing::info!("No configuration file given, using defaults"),
    }

    if cli.dry_run {
        handle_dry_run(&config)?;
        return Ok(());
    }

    match run_harvest(&config).await {
        Ok(_) => {
            tracing::info!("Harvest completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up console logging plus an append-only log file
fn setup_logging(verbose: u8, quiet: bool, log_path: &Path) -> anyhow::Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            _ => EnvFilter::new("quote_harvest=trace,debug"),
        }
    };

    let log_file = open_log_file(log_path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

/// Opens the log file for appending, creating missing parent directories
fn open_log_file(log_path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))
}

/// Handles the --dry-run mode: shows what would be scraped
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Quote-Harvest Dry Run ===\n");

    println!("Scraper:");
    println!("  Base URL: {}", config.scraper.base_url);
    println!("  Start page: {}", config.scraper.start_url()?);
    println!("  Request timeout: {}s", config.scraper.request_timeout);
    println!("  Biographies: {}", config.scraper.fetch_bios);

    println!("\nOutput:");
    println!("  Quotes: {}", config.output.quotes_path);
    if config.scraper.fetch_bios {
        let bio_path =
            quote_harvest::output::bio_output_path(Path::new(&config.output.quotes_path))?;
        println!("  Authors: {}", bio_path.display());
    }
    println!("  Log: {}", config.output.log_path);

    if config.scraper.fetch_bios {
        println!("\nBiography cache:");
        println!("  Backend: {:?}", config.cache.backend);
        match config.cache.backend {
            CacheBackend::Redis => println!("  Redis: {}", config.cache.redis_url()),
            CacheBackend::Sqlite => println!("  Database: {}", config.cache.database_path),
            CacheBackend::Memory => {}
        }
        println!("  TTL: {}s", config.cache.ttl_seconds);
        println!("  Key scheme: {:?}", config.cache.key_scheme);
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}
