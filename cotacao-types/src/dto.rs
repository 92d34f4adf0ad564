//! Upstream API response shape.

use serde::Deserialize;

use crate::domain::Bid;

/// Response document of the AwesomeAPI `last/USD-BRL` endpoint.
///
/// Only the `bid` field is read; every other field the provider sends is
/// ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdBrlResponse {
    #[serde(rename = "USDBRL")]
    pub usd_brl: UsdBrlQuote,
}

/// The nested `USDBRL` object.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdBrlQuote {
    /// Purchase-side quote as a decimal string, kept unparsed.
    pub bid: String,
}

impl UsdBrlResponse {
    /// Extracts the bid, discarding the rest of the document.
    pub fn into_bid(self) -> Bid {
        Bid::new(self.usd_brl.bid)
    }
}
