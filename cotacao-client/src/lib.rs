//! # Cotacao Client SDK
//!
//! A typed Rust client for the cotacao API. One call, one bounded-time GET,
//! no retries.

use std::time::Duration;

use reqwest::Client;

use cotacao_types::Bid;

/// Hard deadline on the whole request, from send to the body being read.
pub const REQUEST_DEADLINE: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request exceeded its deadline")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("response decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Cotacao API client.
pub struct CotacaoClient {
    base_url: String,
    http: Client,
}

impl CotacaoClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetches the current USD→BRL bid from the server.
    ///
    /// Any non-200 status is an error; the body is decoded as a JSON string
    /// and a decode failure is surfaced rather than ignored.
    pub async fn fetch_bid(&self) -> Result<Bid, ClientError> {
        let resp = self
            .http
            .get(format!("{}/cotacao", self.base_url))
            .timeout(REQUEST_DEADLINE)
            .send()
            .await
            .map_err(map_transport)?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(map_transport)?;
        let bid: Bid = serde_json::from_str(&body)?;
        Ok(bid)
    }
}

fn map_transport(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(err.to_string())
    }
}
