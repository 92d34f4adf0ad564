//! Upstream rate source port.

use crate::domain::Bid;
use crate::error::FetchError;

/// Port trait for the upstream USD→BRL rate provider.
///
/// Implementations issue exactly one bounded-time request per call; a failure
/// propagates immediately, there are no retries at any layer.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Fetches the current bid from the upstream provider.
    async fn latest(&self) -> Result<Bid, FetchError>;
}
