//! Serper-Search demo entry point
//!
//! Runs one blocking search and prints the raw JSON response.

use anyhow::Result;
use serper_search::{config, SerperClient};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_QUERY: &str = "apple inc";

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("serper-search {}", serper_search::VERSION);
        return Ok(());
    }

    let query = if args.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        args.join(" ")
    };

    let settings = config::load()?;
    let client = SerperClient::from_settings(&settings)?;
    info!("Searching for '{}'", query);

    let raw = client.raw_results_blocking(&query, client.max_results())?;
    println!("{}", serde_json::to_string_pretty(&raw)?);

    Ok(())
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Serper-Search v{}
Serper web search adapter

USAGE:
    serper-search [QUERY...]

With no query, searches for "{}".

ENVIRONMENT VARIABLES:
    SERPER_API_KEY         API key (required unless set in the settings file)
    SERPER_SETTINGS_PATH   Path to serper.yml
    SERPER_ENDPOINT        Search endpoint
    SERPER_MAX_RESULTS     Results per search
    SERPER_TIMEOUT         Request timeout in seconds
    RUST_LOG               Log filter (default: info)
"#,
        serper_search::VERSION,
        DEFAULT_QUERY
    );
}
