//! Positional card identity.

use serde::{Deserialize, Serialize};

/// Position of a card in the document-order snapshot.
///
/// Cards carry no identifier of their own; the same index names a card in its
/// section and in any search result copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIndex(usize);

impl CardIndex {
    /// Create a new index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying position.
    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl ::core::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CardIndex> for usize {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}
