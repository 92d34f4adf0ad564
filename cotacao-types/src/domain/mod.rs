//! Pure domain types.

mod bid;

pub use bid::Bid;
