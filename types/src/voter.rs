//! Caller identity used for one-vote-per-election enforcement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque voter token supplied by the calling context.
///
/// The ledger never inspects its structure; only equality matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
