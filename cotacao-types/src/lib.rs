//! # Cotacao Types
//!
//! Domain types and port traits for the USD→BRL quote service.
//! This crate has ZERO external IO dependencies - only data structures,
//! error types, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - The `Bid` value object
//! - `dto` - The upstream API response shape
//! - `error` - Per-layer error taxonomy
//! - `ports/` - Trait definitions that adapters must implement

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::Bid;
pub use dto::{UsdBrlQuote, UsdBrlResponse};
pub use error::{AppError, FetchError, StoreError};
pub use ports::{QuoteRepository, RateSource};
