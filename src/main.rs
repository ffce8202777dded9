//! Brace Expand - command line driver
//!
//! Expands each argument pattern (or each stdin line when no patterns are
//! given) and prints the results to stdout, one per line.

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brace_expand::{BraceExpander, CacheConfig};

const USAGE: &str = "\
Usage: brace-expand [OPTIONS] [PATTERN]...

Expands shell-style brace patterns. With no PATTERN, reads one pattern
per line from stdin.

Options:
  --json     Print each pattern's expansions as a JSON array
  --stats    Print cache statistics to stderr on exit
  --help     Show this message

Cache capacities are read from EXPANSION_CACHE_CAPACITY,
PARSE_CACHE_CAPACITY and RECURSION_CACHE_CAPACITY.";

/// Main entry point for the brace expansion CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Parse flags and collect patterns
/// 3. Load cache configuration from environment variables
/// 4. Expand each pattern and print the results
fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brace_expand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut json = false;
    let mut stats = false;
    let mut patterns = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--stats" => stats = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => patterns.push(arg),
        }
    }

    let config = CacheConfig::from_env();
    info!(
        "cache capacities: expansion={}, parse={}, recursion={}",
        config.expansion_capacity, config.parse_capacity, config.recursion_capacity
    );

    let mut expander = BraceExpander::with_config(config);

    if patterns.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            emit(&mut expander, &line?, json)?;
        }
    } else {
        for pattern in &patterns {
            emit(&mut expander, pattern, json)?;
        }
    }

    if stats {
        eprintln!("{}", serde_json::to_string_pretty(&expander.cache_stats())?);
    }

    Ok(())
}

/// Expands one pattern and prints its results.
fn emit(expander: &mut BraceExpander, pattern: &str, json: bool) -> Result<()> {
    let results = expander.expand(pattern);
    if json {
        println!("{}", serde_json::to_string(&results)?);
    } else {
        for result in results {
            println!("{result}");
        }
    }
    Ok(())
}
