//! # Cotacao Hex
//!
//! Application service layer and HTTP adapter for the cotacao service.
//!
//! ## Architecture
//!
//! - `service` - Application service (fetch → persist → respond chain)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: RateSource` and `R: QuoteRepository`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod service;


pub use service::QuoteService;
