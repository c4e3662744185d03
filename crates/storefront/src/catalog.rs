//! Catalog file loading.
//!
//! The catalog is a JSON file read once at startup. It describes the page
//! layout (which interactive controls exist) and the section containers with
//! their product cards in document order.
//!
//! ```json
//! {
//!   "page": { "theme_toggle": true, "search_input": true, "results_area": true },
//!   "sections": [
//!     { "heading": "Laptops", "cards": [
//!       { "title": "HP EliteBook 840", "price": "UGX 1,250,000", "search_name": "hp elitebook 840" }
//!     ] }
//!   ]
//! }
//! ```

use std::path::Path;

use bytemart_core::{Catalog, CatalogSection, PageControls};
use serde::Deserialize;

/// Errors loading the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub page: PageControls,
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
}

/// A loaded catalog: the card snapshot plus the page's controls.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub controls: PageControls,
}

impl CatalogFile {
    /// Parse catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the JSON does not match the layout.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Capture the card snapshot.
    #[must_use]
    pub fn into_loaded(self) -> LoadedCatalog {
        LoadedCatalog {
            catalog: Catalog::new(self.sections),
            controls: self.page,
        }
    }
}

impl LoadedCatalog {
    /// Load the catalog at `path`, degrading to an empty catalog on failure.
    ///
    /// Startup never fails because of the catalog; problems are logged.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        let loaded = match CatalogFile::read(path) {
            Ok(file) => file.into_loaded(),
            Err(e) => {
                tracing::error!("Failed to load catalog {:?}: {}", path, e);
                Self::default()
            }
        };

        loaded.report_missing_controls();
        tracing::info!(
            sections = loaded.catalog.sections().len(),
            cards = loaded.catalog.len(),
            "Catalog loaded"
        );
        loaded
    }

    /// Log controls the page layout lacks; their features stay inert.
    fn report_missing_controls(&self) {
        if !self.controls.theme_toggle {
            tracing::error!("Theme toggle button not found.");
        }
        if !self.controls.search_input {
            tracing::warn!("Search input not found; search is disabled");
        }
        if !self.controls.results_area {
            tracing::warn!("Search results container not found; search is disabled");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bytemart_core::CardIndex;

    #[test]
    fn test_parse_full_file() {
        let file = CatalogFile::parse(
            r#"{
                "page": { "theme_toggle": false },
                "sections": [
                    { "heading": "Laptops", "cards": [
                        { "title": "HP EliteBook 840", "price": "UGX 1,250,000", "search_name": "hp elitebook 840" }
                    ] },
                    { "heading": "Phones", "cards": [ { "title": "Nameless" } ] }
                ]
            }"#,
        )
        .unwrap();

        let loaded = file.into_loaded();
        assert!(!loaded.controls.theme_toggle);
        assert!(loaded.controls.search_input);
        assert!(loaded.controls.results_area);
        assert_eq!(loaded.catalog.len(), 2);
        let second = loaded.catalog.card(CardIndex::new(1)).unwrap();
        assert_eq!(second.title.as_deref(), Some("Nameless"));
        assert!(second.search_name.is_none());
    }

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let loaded = CatalogFile::parse("{}").unwrap().into_loaded();
        assert!(loaded.catalog.is_empty());
        assert_eq!(loaded.controls, PageControls::default());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            CatalogFile::parse("{\"sections\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let loaded = LoadedCatalog::load_or_empty(Path::new("/nonexistent/catalog.json"));
        assert!(loaded.catalog.is_empty());
        assert_eq!(loaded.controls, PageControls::default());
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/catalog.json");
        let loaded = CatalogFile::read(&path).unwrap().into_loaded();
        assert!(!loaded.catalog.is_empty());
        assert!(
            loaded
                .catalog
                .cards()
                .all(|(_, card)| card.search_name.is_some())
        );
    }

    #[test]
    fn test_bundled_catalog_images_exist() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        let workspace = manifest.ancestors().nth(2).unwrap();
        let static_dir = workspace.join(crate::routes::STATIC_DIR);

        let loaded = CatalogFile::read(&manifest.join("content/catalog.json"))
            .unwrap()
            .into_loaded();
        let images: Vec<_> = loaded
            .catalog
            .cards()
            .filter_map(|(_, card)| card.image.as_deref())
            .collect();
        assert!(!images.is_empty());

        for image in images {
            let Some(relative) = image.strip_prefix("/static/") else {
                continue;
            };
            assert!(
                static_dir.join(relative).is_file(),
                "missing static asset for {image}"
            );
        }
    }
}
