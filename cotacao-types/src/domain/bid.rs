//! The `Bid` value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One USD→BRL purchase-side quote, carried as the decimal string the
/// upstream API produced.
///
/// The textual representation is preserved verbatim end-to-end: this type is
/// never converted to a floating-point number, so the value stored and logged
/// is byte-identical to the one received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bid(String);

impl Bid {
    /// Wraps a raw decimal string as received from the upstream API.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The quote exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the bid, returning the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Bid {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
