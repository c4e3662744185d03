//! Catalog page route handlers.
//!
//! Every handler applies at most one page event to the visitor's stored
//! `PageState`, carries out the returned effects and renders the whole page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
};
use bytemart_core::{
    ActionBinder, CardIndex, CardView, Effect, OverlayClick, PageEvent, PageState, PageView,
    ProductCard, ResultsView, page::no_matches_message,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{
    RequestId, load_page_state, persist_theme, persisted_theme, save_page_state,
};
use crate::state::AppState;

/// Order control bound to a rendered card: a form posting to `/order/{index}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAction {
    pub href: String,
}

/// Binds every rendered card, original or result copy, to the same order route.
pub struct OrderFormBinder;

impl ActionBinder for OrderFormBinder {
    type Control = OrderAction;

    fn bind(&self, index: CardIndex, _card: &ProductCard) -> OrderAction {
        OrderAction {
            href: format!("/order/{index}"),
        }
    }
}

/// Search input event.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Overlay click event.
#[derive(Debug, Deserialize)]
pub struct DismissForm {
    pub target: OverlayClick,
}

/// The catalog page.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub view: PageView<OrderAction>,
}

impl PageTemplate {
    fn render_state(state: &AppState, page: &PageState) -> Self {
        Self {
            view: PageView::build(page, &state.page_context(), &OrderFormBinder),
        }
    }

    /// Result copies, empty unless the filter found matches.
    #[must_use]
    pub fn result_cards(&self) -> &[CardView<OrderAction>] {
        match &self.view.results {
            ResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// The no-results message, when an active query matched nothing.
    #[must_use]
    pub fn no_matches(&self) -> Option<String> {
        match &self.view.results {
            ResultsView::NoMatches { query } => Some(no_matches_message(query)),
            _ => None,
        }
    }
}

/// Apply one event to the stored page state and render the result.
async fn dispatch(state: &AppState, session: &Session, event: PageEvent) -> Result<PageTemplate> {
    let mut page = load_page_state(session).await?;
    let effects = page.apply(event, &state.page_context());

    for effect in effects {
        match effect {
            Effect::PersistTheme(mode) => {
                persist_theme(session, mode).await?;
                tracing::debug!(theme = %mode, "Theme preference persisted");
            }
        }
    }

    save_page_state(session, &page).await?;
    Ok(PageTemplate::render_state(state, &page))
}

/// Page load: start a fresh page.
#[instrument(skip(state, session, request_id), fields(request_id = %request_id.as_str()))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    request_id: RequestId,
) -> Result<PageTemplate> {
    let restored = if state.config().restore_theme {
        persisted_theme(&session).await?
    } else {
        None
    };

    let page = PageState::load(restored);
    save_page_state(&session, &page).await?;
    Ok(PageTemplate::render_state(&state, &page))
}

/// Theme toggle clicked.
#[instrument(skip(state, session, request_id), fields(request_id = %request_id.as_str()))]
pub async fn toggle_theme(
    State(state): State<AppState>,
    session: Session,
    request_id: RequestId,
) -> Result<PageTemplate> {
    add_breadcrumb("theme", "Toggled theme", None);
    dispatch(&state, &session, PageEvent::ToggleTheme).await
}

/// Search input changed.
#[instrument(skip(state, session, request_id), fields(request_id = %request_id.as_str()))]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    request_id: RequestId,
    Query(query): Query<SearchQuery>,
) -> Result<PageTemplate> {
    dispatch(&state, &session, PageEvent::SearchInput(query.q)).await
}

/// Order control activated on a card.
#[instrument(skip(state, session, request_id), fields(request_id = %request_id.as_str()))]
pub async fn order(
    State(state): State<AppState>,
    session: Session,
    request_id: RequestId,
    Path(index): Path<usize>,
) -> Result<PageTemplate> {
    let index = CardIndex::new(index);
    if state.catalog().card(index).is_none() {
        tracing::warn!(%index, "Order action outside the catalog; using fallback product");
    }
    add_breadcrumb(
        "order",
        "Opened order dialog",
        Some(&[("card_index", &index.to_string())]),
    );
    dispatch(&state, &session, PageEvent::OrderClick(index)).await
}

/// Click on the open overlay.
#[instrument(skip(state, session, request_id), fields(request_id = %request_id.as_str()))]
pub async fn dismiss(
    State(state): State<AppState>,
    session: Session,
    request_id: RequestId,
    Form(form): Form<DismissForm>,
) -> Result<PageTemplate> {
    dispatch(&state, &session, PageEvent::OverlayClick(form.target)).await
}

#[cfg(test)]
mod tests {
    use bytemart_core::{Catalog, CatalogSection, ThemeMode};

    use super::*;
    use crate::catalog::LoadedCatalog;
    use crate::config::StorefrontConfig;

    fn state() -> AppState {
        let catalog = Catalog::new(vec![CatalogSection {
            heading: "Laptops".to_string(),
            cards: vec![ProductCard {
                title: Some("HP EliteBook 840".to_string()),
                price: Some("UGX 1,250,000".to_string()),
                search_name: Some("hp elitebook 840".to_string()),
                ..Default::default()
            }],
        }]);
        AppState::with_catalog(
            StorefrontConfig::default(),
            LoadedCatalog {
                catalog,
                controls: bytemart_core::PageControls::default(),
            },
        )
    }

    #[test]
    fn test_binder_targets_order_route() {
        let action = OrderFormBinder.bind(CardIndex::new(4), &ProductCard::default());
        assert_eq!(action.href, "/order/4");
    }

    #[test]
    fn test_render_marks_root_theme() {
        let page = PageState::load(Some(ThemeMode::Dark));
        let html = PageTemplate::render_state(&state(), &page)
            .render()
            .unwrap_or_default();
        assert!(html.contains(r#"class="dark-mode""#));
        assert!(html.contains(r#"data-theme="dark""#));
    }

    #[test]
    fn test_render_no_matches_message() {
        let page = PageState {
            query: "zzz-no-such-item".to_string(),
            ..PageState::default()
        };
        let template = PageTemplate::render_state(&state(), &page);
        assert!(template.result_cards().is_empty());
        assert_eq!(
            template.no_matches().as_deref(),
            Some("No products found matching \"zzz-no-such-item\".")
        );
    }

    #[test]
    fn test_render_escapes_query() {
        let page = PageState {
            query: "<b>".to_string(),
            ..PageState::default()
        };
        let html = PageTemplate::render_state(&state(), &page)
            .render()
            .unwrap_or_default();
        assert!(!html.contains("<b>"));
    }
}
