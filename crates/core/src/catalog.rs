//! The catalog snapshot and the name filter.
//!
//! The snapshot is captured once when the catalog is built and never changes
//! afterwards. Filtering is a pure function of the snapshot and a query: each
//! pass recomputes its result from scratch, so nothing from a previous pass
//! survives into the next one.

use serde::{Deserialize, Serialize};

use crate::types::{CardIndex, ProductCard};

/// A section container on the page: a heading and its cards in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub heading: String,
    #[serde(default)]
    pub cards: Vec<ProductCard>,
}

/// Result of one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Normalized query is empty; sections show and results hide.
    Inactive,
    /// Matching cards in snapshot order.
    Matches(Vec<CardIndex>),
    /// Query is active but nothing matched.
    NoMatches,
}

impl FilterOutcome {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Ordered sections plus the flattened document-order card snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<CatalogSection>,
    /// Snapshot index of the first card of each section.
    section_offsets: Vec<usize>,
    snapshot: Vec<ProductCard>,
}

impl Catalog {
    /// Build a catalog, capturing the snapshot of every card in section order.
    #[must_use]
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        let mut section_offsets = Vec::with_capacity(sections.len());
        let mut snapshot = Vec::new();
        for section in &sections {
            section_offsets.push(snapshot.len());
            snapshot.extend(section.cards.iter().cloned());
        }

        Self {
            sections,
            section_offsets,
            snapshot,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Cards of one section paired with their snapshot indices.
    pub fn section_cards(
        &self,
        section: usize,
    ) -> impl Iterator<Item = (CardIndex, &ProductCard)> + '_ {
        let offset = self.section_offsets.get(section).copied().unwrap_or(0);
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|s| s.cards.iter())
            .enumerate()
            .map(move |(i, card)| (CardIndex::new(offset + i), card))
    }

    /// All cards in document order.
    pub fn cards(&self) -> impl Iterator<Item = (CardIndex, &ProductCard)> + '_ {
        self.snapshot
            .iter()
            .enumerate()
            .map(|(i, card)| (CardIndex::new(i), card))
    }

    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&ProductCard> {
        self.snapshot.get(index.as_usize())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Select the cards whose searchable name contains the query.
    ///
    /// The query is trimmed and lowercased first. Matching is plain substring
    /// containment against the lowercased searchable name.
    #[must_use]
    pub fn filter(&self, query: &str) -> FilterOutcome {
        let query = normalize_query(query);
        if query.is_empty() {
            return FilterOutcome::Inactive;
        }

        let matches: Vec<CardIndex> = self
            .cards()
            .filter(|(_, card)| card.matches(&query))
            .map(|(index, _)| index)
            .collect();

        if matches.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(matches)
        }
    }
}

/// Trim surrounding whitespace and lowercase.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card(name: &str) -> ProductCard {
        ProductCard {
            title: Some(name.to_string()),
            price: Some("UGX 100,000".to_string()),
            search_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogSection {
                heading: "Laptops".to_string(),
                cards: vec![card("HP EliteBook 840"), card("Dell Latitude 7490")],
            },
            CatalogSection {
                heading: "Phones".to_string(),
                cards: vec![card("iPhone 12"), card("HP Stream 11"), card("Samsung A52")],
            },
        ])
    }

    fn indices(ids: &[usize]) -> Vec<CardIndex> {
        ids.iter().copied().map(CardIndex::new).collect()
    }

    #[test]
    fn test_snapshot_follows_document_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        let names: Vec<_> = catalog
            .cards()
            .filter_map(|(_, c)| c.title.as_deref())
            .collect();
        assert_eq!(
            names,
            [
                "HP EliteBook 840",
                "Dell Latitude 7490",
                "iPhone 12",
                "HP Stream 11",
                "Samsung A52"
            ]
        );
    }

    #[test]
    fn test_section_cards_use_snapshot_indices() {
        let catalog = catalog();
        let second: Vec<_> = catalog.section_cards(1).map(|(i, _)| i).collect();
        assert_eq!(second, indices(&[2, 3, 4]));
        assert_eq!(catalog.section_cards(7).count(), 0);
    }

    #[test]
    fn test_empty_and_blank_queries_are_inactive() {
        let catalog = catalog();
        assert_eq!(catalog.filter(""), FilterOutcome::Inactive);
        assert_eq!(catalog.filter("   \t"), FilterOutcome::Inactive);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let catalog = catalog();
        assert_eq!(
            catalog.filter("  HP "),
            FilterOutcome::Matches(indices(&[0, 3]))
        );
    }

    #[test]
    fn test_membership_is_exactly_substring_containment() {
        let catalog = catalog();
        for query in ["a", "e", "hp", "12", "book", "x", "latitude 7", " s"] {
            let expected: Vec<_> = catalog
                .cards()
                .filter(|(_, c)| {
                    c.search_name
                        .as_deref()
                        .unwrap()
                        .to_lowercase()
                        .contains(&normalize_query(query))
                })
                .map(|(i, _)| i)
                .collect();
            match catalog.filter(query) {
                FilterOutcome::Matches(found) => assert_eq!(found, expected, "query {query:?}"),
                FilterOutcome::NoMatches => assert!(expected.is_empty(), "query {query:?}"),
                FilterOutcome::Inactive => panic!("query {query:?} should be active"),
            }
        }
    }

    #[test]
    fn test_narrowing_yields_ordered_subset() {
        let catalog = catalog();
        let FilterOutcome::Matches(broad) = catalog.filter("e") else {
            panic!("expected matches");
        };
        let FilterOutcome::Matches(narrow) = catalog.filter("el") else {
            panic!("expected matches");
        };
        assert!(narrow.len() < broad.len());
        let projected: Vec<_> = broad.iter().copied().filter(|i| narrow.contains(i)).collect();
        assert_eq!(projected, narrow);
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(
            catalog().filter("zzz-no-such-item"),
            FilterOutcome::NoMatches
        );
    }

    #[test]
    fn test_cards_without_search_name_are_skipped() {
        let catalog = Catalog::new(vec![CatalogSection {
            heading: "Misc".to_string(),
            cards: vec![
                ProductCard {
                    title: Some("Mystery Box".to_string()),
                    ..Default::default()
                },
                card("Mouse"),
            ],
        }]);
        assert_eq!(catalog.filter("m"), FilterOutcome::Matches(indices(&[1])));
    }
}
