//! Page-Inspector main entry point
//!
//! This is the command-line interface for the Page-Inspector service.

use clap::Parser;
use page_inspector::config::{load_config_with_hash, Config};
use page_inspector::output::{print_report, render_json};
use page_inspector::server::{serve, AppState};
use page_inspector::{Analyzer, ConfigError, MemoryStore};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Page-Inspector: structural and SEO signals for web pages
///
/// By default Page-Inspector serves a CRUD API where every created record is
/// the analysis of a URL. With --analyze it analyzes one page and exits.
#[derive(Parser, Debug)]
#[command(name = "page-inspector")]
#[command(version)]
#[command(about = "Analyze web pages for structural and SEO signals", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the API bind address from the configuration
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Analyze a single URL, print the result, and exit
    #[arg(long, value_name = "URL", conflicts_with = "dry_run")]
    analyze: Option<String>,

    /// Print the result of --analyze as JSON
    #[arg(long, requires = "analyze")]
    json: bool,

    /// Validate config and show the effective settings without serving
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;

    if let Some(bind) = cli.bind {
        config.server.bind_address = bind.to_string();
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let analyzer = Analyzer::new(&config)?;

    match cli.analyze {
        Some(url) => Ok(handle_analyze(&analyzer, &url, cli.json).await?),
        None => Ok(handle_serve(analyzer, &config).await?),
    }
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> page_inspector::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    match load_config_with_hash(path) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_inspector=info,warn"),
            1 => EnvFilter::new("page_inspector=debug,info"),
            2 => EnvFilter::new("page_inspector=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Page-Inspector Dry Run ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\nAnalyzer:");
    println!("  Request timeout: {}s", config.analyzer.request_timeout_secs);
    println!("  Connect timeout: {}s", config.analyzer.connect_timeout_secs);
    println!("  Probe concurrency: {}", config.analyzer.probe_concurrency);
    println!(
        "  Probe failure policy: {:?}",
        config.analyzer.probe_failure_policy
    );
    println!("  Max redirects: {}", config.analyzer.max_redirects);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.client_name);
    println!("  Version: {}", config.user_agent.client_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\n✓ Configuration is valid");
}

/// Handles the --analyze mode: one analysis printed to stdout
async fn handle_analyze(
    analyzer: &Analyzer,
    url: &str,
    json: bool,
) -> page_inspector::Result<()> {
    let result = match analyzer.analyze(url).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            return Err(e.into());
        }
    };

    if json {
        println!("{}", render_json(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

/// Handles the default mode: serves the CRUD API
async fn handle_serve(analyzer: Analyzer, config: &Config) -> page_inspector::Result<()> {
    let addr: SocketAddr = config.server.bind_address.parse().map_err(|e| {
        ConfigError::Validation(format!(
            "invalid bind address {}: {}",
            config.server.bind_address, e
        ))
    })?;

    tracing::info!(
        "Probing external links with {} workers ({:?} on failure)",
        config.analyzer.probe_concurrency,
        analyzer.probe_failure_policy()
    );

    let state = Arc::new(AppState::new(analyzer, Arc::new(MemoryStore::new())));
    serve(addr, state).await?;
    Ok(())
}
