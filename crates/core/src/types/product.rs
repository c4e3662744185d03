//! Product card record.

use serde::{Deserialize, Serialize};

/// One catalog item as rendered on the page.
///
/// Every field is optional: cards come from an external template source and
/// this crate only reads them. The price is pre-formatted display text and is
/// never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Display name shown in the card title.
    #[serde(default)]
    pub title: Option<String>,
    /// Display price, e.g. `"UGX 1,250,000"`.
    #[serde(default)]
    pub price: Option<String>,
    /// Searchable name attribute (`data-product-name`).
    #[serde(default)]
    pub search_name: Option<String>,
    /// Image URL, used only for rendering.
    #[serde(default)]
    pub image: Option<String>,
    /// Image alt text.
    #[serde(default)]
    pub image_alt: Option<String>,
}

impl ProductCard {
    /// Whether the card's searchable name contains an already-normalized query.
    ///
    /// Cards without a searchable name never match.
    #[must_use]
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.search_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(normalized_query))
    }

    /// Display title, or `None` when absent or empty.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Display price, or `None` when absent or empty.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        self.price.as_deref().filter(|p| !p.is_empty())
    }
}
