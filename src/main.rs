use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use arxiv_scout::client::SearchClient;
use arxiv_scout::provider::ArxivProvider;
use arxiv_scout::query::build_query;
use arxiv_scout::render::render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so the rendered listing on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // Prompt on stderr, keeping stdout reserved for the result listing.
    eprint!("Enter a keyword for arXiv search: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let keyword = line.trim();

    if keyword.is_empty() {
        tracing::warn!("No keyword entered. Exiting.");
        return Ok(());
    }

    let query = build_query(keyword);
    let client = SearchClient::new(Arc::new(ArxivProvider::new()?));
    let papers = client.search(&query).await;

    render(&papers, &mut io::stdout())?;
    Ok(())
}
