//! Quote repository port.
//!
//! Adapters (SQLite, in-memory test doubles) implement this trait.

use crate::domain::Bid;
use crate::error::StoreError;

/// The repository port for persisting quote observations.
///
/// One call persists one row. Implementations acquire and release the store
/// handle within the call (scoped acquisition), keeping failure domains
/// isolated per request. Rows are append-only: nothing in the system updates,
/// deletes, or reads them back.
#[async_trait::async_trait]
pub trait QuoteRepository: Send + Sync + 'static {
    /// Appends one observation with the given bid value.
    async fn save(&self, bid: &Bid) -> Result<(), StoreError>;
}
