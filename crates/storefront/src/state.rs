//! Application state shared across handlers.

use std::sync::Arc;

use bytemart_core::{Catalog, ChatHandoff, PageContext, PageControls};

use crate::catalog::LoadedCatalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog snapshot inside it
/// is captured once at startup and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    controls: PageControls,
    handoff: ChatHandoff,
}

impl AppState {
    /// Create application state, loading the catalog named in the config.
    ///
    /// A missing or malformed catalog is logged and replaced by an empty one.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let loaded = LoadedCatalog::load_or_empty(&config.catalog_path);
        Self::with_catalog(config, loaded)
    }

    /// Create application state around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, loaded: LoadedCatalog) -> Self {
        let handoff = ChatHandoff::new(config.chat_base_url.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: loaded.catalog,
                controls: loaded.controls,
                handoff,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Read-only inputs for applying page events.
    #[must_use]
    pub fn page_context(&self) -> PageContext<'_> {
        PageContext::new(&self.inner.catalog, &self.inner.handoff, self.inner.controls)
    }
}
