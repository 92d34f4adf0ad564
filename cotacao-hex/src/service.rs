//! Quote Application Service
//!
//! Orchestrates the per-request chain through the ports.
//! Contains NO infrastructure logic - pure orchestration.

use cotacao_types::{AppError, Bid, QuoteRepository, RateSource};

/// Application service for quote requests.
///
/// Generic over its two ports - the adapters are injected at compile time.
/// This enables:
/// - Swapping the upstream provider or store without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
pub struct QuoteService<S: RateSource, R: QuoteRepository> {
    source: S,
    repo: R,
}

impl<S: RateSource, R: QuoteRepository> QuoteService<S, R> {
    /// Creates a new quote service with the given adapters.
    pub fn new(source: S, repo: R) -> Self {
        Self { source, repo }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Runs one request chain: fetch the current bid, persist it, return it.
    ///
    /// The chain is linear with no branching back-edges: the first failure
    /// wins and nothing is retried. A persisted row is not rolled back when a
    /// later step fails, and the fetch side effect has nothing to roll back.
    pub async fn latest_quote(&self) -> Result<Bid, AppError> {
        let bid = self.source.latest().await?;
        self.repo.save(&bid).await?;
        Ok(bid)
    }
}
