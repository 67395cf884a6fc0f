//! Sift CLI - query a launcher catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # One query against a title-per-line catalog
//! sift apps.txt "fi man"
//! sift apps.json ffx --mode fuzzy --json
//!
//! # No query: answer each stdin line, like keystrokes in a launcher
//! sift apps.txt
//! ```

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use sift_core::{Catalog, Item, SearchConfig, SearchMode};
use sift_search::SearchEngine;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sift launcher search CLI.
///
/// Matches requests against item titles by title prefix, word prefixes, or
/// fuzzy subsequence.
#[derive(Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Catalog file: `.json` array of {id, title}, otherwise one title per line
    catalog: PathBuf,

    /// Search request; read from stdin line by line when omitted
    query: Option<String>,

    /// Matching strategy (overrides the config file)
    #[arg(short, long)]
    mode: Option<SearchMode>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (-vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;

    let mut catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;
    catalog.sort_by_title();
    info!(items = catalog.len(), path = %cli.catalog.display(), "catalog loaded");

    let engine = SearchEngine::new(catalog.items(), &config);

    match &cli.query {
        Some(query) => print_results(&engine, query, cli.json),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read query from stdin")?;
                print_results(&engine, &line, cli.json)?;
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.search.mode = mode;
    }
    if cli.limit.is_some() {
        config.search.result_limit = cli.limit;
    }

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            warn!("invalid config: {problem}");
        }
        config = config.with_defaults_for_invalid();
    }
    Ok(config)
}

fn print_results(engine: &SearchEngine<'_, Item>, query: &str, json: bool) -> Result<()> {
    let results = engine.query(query);
    let output = if json {
        output::format_json(query, engine.mode(), &results)?
    } else {
        output::format_human(&results)
    };
    println!("{output}");
    Ok(())
}
