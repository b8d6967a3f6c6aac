use anyhow::Result;
use clap::Parser;
use plugin_find::{extract, fetch, output};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Fetch Tenable plugin search results based on a given keyword.
#[derive(Debug, Parser)]
#[command(name = "plugin-find", version, about)]
struct Cli {
    /// Keyword to search for plugins (e.g. "chrome").
    search_keyword: String,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = fetch::build_client()?;
    let Some(html) = fetch::fetch(&client, fetch::SEARCH_ENDPOINT, &cli.search_keyword)? else {
        // Non-200: the status was already logged, nothing to print.
        return Ok(());
    };

    let records = extract::extract(&html);
    debug!(count = records.len(), "extracted records");
    println!("{}", output::to_pretty_json(&records)?);
    Ok(())
}
