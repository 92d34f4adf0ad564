//! # Cotacao Upstream
//!
//! Reqwest adapter for the `RateSource` port. Issues one bounded-time GET to
//! the AwesomeAPI USD-BRL endpoint and decodes the `bid` field, preserving its
//! decimal text exactly as received.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use cotacao_types::{Bid, FetchError, RateSource, UsdBrlResponse};

/// Default upstream endpoint.
pub const AWESOMEAPI_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Hard deadline on the whole upstream call, measured from send to the body
/// being fully read.
pub const FETCH_DEADLINE: Duration = Duration::from_millis(200);

/// HTTP rate source backed by AwesomeAPI.
pub struct AwesomeApiSource {
    url: String,
    http: Client,
}

impl AwesomeApiSource {
    /// Creates a source against the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl RateSource for AwesomeApiSource {
    async fn latest(&self) -> Result<Bid, FetchError> {
        let resp = self
            .http
            .get(&self.url)
            .timeout(FETCH_DEADLINE)
            .send()
            .await
            .map_err(map_transport)?;

        // The response status is not inspected: a non-JSON error body
        // surfaces as a decode failure.
        let body = resp.text().await.map_err(map_transport)?;

        let quote: UsdBrlResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let bid = quote.into_bid();
        tracing::debug!(bid = %bid, "fetched upstream quote");
        Ok(bid)
    }
}

fn map_transport(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}
