use anyhow::{Error, Result};
use reqwest::Client;

use crate::models::ResultSet;

const BASE_URL: &str = "https://api.iextrading.com/1.0";

/// IEX caps batch quote requests at 100 symbols.
pub const TICKERS_PER_REQUEST: usize = 100;

/// Partition the requested tickers into consecutive provider-sized chunks.
/// The last chunk may be smaller; every ticker appears in exactly one chunk.
pub fn chunk_tickers(tickers: &[String], cap: usize) -> Vec<&[String]> {
    tickers.chunks(cap).collect()
}

/// One batch request for quote and stats data. Callers pre-chunk to the
/// provider cap; this never re-chunks.
pub async fn fetch_chunk(client: &Client, tickers: &[String]) -> Result<ResultSet> {
    let url = format!(
        "{}/stock/market/batch?symbols={}&types=quote,stats",
        BASE_URL,
        tickers.join(",")
    );
    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let results = res.json::<ResultSet>().await?;
    Ok(results)
}

/// Fetch quote data for an arbitrary number of tickers, one provider call
/// per chunk, merged into a single result set. A failed chunk contributes
/// nothing; its tickers surface later as missing rather than aborting the
/// run. Duplicate tickers resolve to the last chunk's value.
pub async fn download_quotes(client: &Client, tickers: &[String]) -> ResultSet {
    let mut results = ResultSet::new();

    for chunk in chunk_tickers(tickers, TICKERS_PER_REQUEST) {
        if let Ok(chunk_results) = fetch_chunk(client, chunk).await {
            results.extend(chunk_results);
        }
    }

    results
}
