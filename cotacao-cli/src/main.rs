//! Cotacao CLI
//!
//! One-shot client: polls `GET /cotacao` once with a 300ms deadline and
//! truncate-writes the quote to a local text file. Any failure - transport,
//! timeout, non-200 status, body decode, file IO - terminates the process
//! with a non-zero exit and the error on stderr. No flags, no retries.

use std::path::Path;

use anyhow::Context;

use cotacao_client::CotacaoClient;
use cotacao_types::Bid;

const SERVER_URL: &str = "http://localhost:8080";
const OUTPUT_FILE: &str = "cotacao.txt";

/// The single log line written per run.
fn quote_line(bid: &Bid) -> String {
    format!("Dólar: {bid}\n")
}

/// Truncate-writes the quote line, replacing any prior content.
async fn write_quote(path: impl AsRef<Path>, bid: &Bid) -> std::io::Result<()> {
    tokio::fs::write(path, quote_line(bid)).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let bid = CotacaoClient::new(SERVER_URL)
        .fetch_bid()
        .await
        .context("fetching quote from server")?;

    write_quote(OUTPUT_FILE, &bid)
        .await
        .with_context(|| format!("writing {OUTPUT_FILE}"))?;

    println!("Dólar: {bid}");
    Ok(())
}
