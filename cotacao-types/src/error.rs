//! Error types for the cotacao service.

/// Upstream fetch errors (one variant per failure mode of the bounded GET).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream request exceeded its deadline")]
    Timeout,

    #[error("upstream transport failure: {0}")]
    Transport(String),

    #[error("upstream response decode failure: {0}")]
    Decode(String),
}

/// Store-level errors (data access failures).
///
/// Open, schema and insert failures are distinct, equally fatal conditions
/// for the request that triggered them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store open failure: {0}")]
    Open(String),

    #[error("schema setup failure: {0}")]
    Schema(String),

    #[error("insert failure: {0}")]
    Insert(String),

    #[error("insert exceeded its deadline")]
    Timeout,
}

/// Application-level errors surfaced by the quote service.
///
/// Every variant maps to an opaque HTTP 500: no detail is leaked to clients,
/// the full error is logged server-side only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
