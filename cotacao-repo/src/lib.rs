//! # Cotacao Repository
//!
//! Concrete repository implementation (adapter) for the cotacao service.
//! Provides the SQLite adapter that implements the `QuoteRepository` port.

mod sqlite;


pub use sqlite::{INSERT_DEADLINE, SqliteQuoteStore};
