//! Doxscout main entry point
//!
//! A thin command-line boundary over the crawling engine: each
//! subcommand maps to one engine operation and prints its result as
//! JSON (or plain text for page bodies).

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use doxscout::config::{load_config, Config};
use doxscout::urljoin::strip_trailing_slash;
use doxscout::DocsEngine;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Doxscout: query a class-reference documentation site
///
/// Doxscout fetches pages from a generated documentation site, extracts
/// classes, members, modules, files and free functions, and answers
/// ranked full-text queries against a bounded index of the site.
#[derive(Parser, Debug)]
#[command(name = "doxscout")]
#[command(version)]
#[command(about = "Query a class-reference documentation site", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Documentation site address (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    site: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the consolidated navigation structure
    Nav,

    /// List classes found on the listing pages
    Classes,

    /// Show full details for one class
    Class {
        /// Class name (exact, case-insensitive, or substring)
        name: String,
    },

    /// List free functions reachable from the main page
    Functions,

    /// Search the site's index
    Search {
        /// The term to search for
        query: String,

        /// Maximum number of results (non-positive yields none)
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Print a page reduced to plain text
    Page {
        /// Path relative to the site, or an absolute URL
        path: String,
    },

    /// Fetch a raw page body through the cache
    Fetch {
        /// Absolute URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let mut engine = DocsEngine::new(&config).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Nav => {
            let site = require_site(&config)?;
            let nav = engine.navigation_structure(&site).await?;
            print_json(&nav)?;
        }
        Command::Classes => {
            let site = require_site(&config)?;
            let classes = engine.list_classes(&site).await;
            print_json(&classes)?;
        }
        Command::Class { name } => {
            let site = require_site(&config)?;
            match engine.class_details(&site, &name).await? {
                Some(details) => print_json(&details)?,
                None => bail!("No class matching '{}' on {}", name, site),
            }
        }
        Command::Functions => {
            let site = require_site(&config)?;
            let functions = engine.list_functions(&site).await?;
            print_json(&functions)?;
        }
        Command::Search { query, limit } => {
            let site = require_site(&config)?;
            // Negative counts collapse to zero: empty result, no I/O
            let max_results = limit.max(0) as usize;
            let results = engine.search(&site, &query, max_results).await?;
            print_json(&results)?;
        }
        Command::Page { path } => {
            let site = require_site(&config)?;
            let text = engine.page_content(&site, &path).await?;
            println!("{}", text);
        }
        Command::Fetch { url } => {
            let body = engine.fetch_raw_page(&url).await?;
            println!("{}", body);
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doxscout=info,warn"),
            1 => EnvFilter::new("doxscout=debug,info"),
            2 => EnvFilter::new("doxscout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file when given, then applies the --site override
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Config::for_site(""),
    };

    if let Some(site) = &cli.site {
        config.site.address = strip_trailing_slash(site).to_string();
    }

    Ok(config)
}

/// The site address every site-scoped command needs
fn require_site(config: &Config) -> anyhow::Result<String> {
    if config.site.address.is_empty() {
        bail!("No site address given; pass --site or set [site] address in the config file");
    }
    Ok(config.site.address.clone())
}

/// Prints a serializable value as pretty JSON on stdout
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
