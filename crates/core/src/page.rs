//! Page state, events and the rendered view.
//!
//! A [`PageState`] is everything that changes on the catalog page while a
//! visitor uses it: the theme on the root, the last search input and the
//! overlay slot. Hosts feed it one [`PageEvent`] at a time through
//! [`PageState::apply`], perform the returned [`Effect`]s, and render a
//! [`PageView`] built from the new state.
//!
//! # Example
//!
//! ```
//! use bytemart_core::page::{PageContext, PageControls, PageEvent, PageState, Effect};
//! use bytemart_core::{Catalog, ChatHandoff, ThemeMode};
//!
//! let catalog = Catalog::default();
//! let handoff = ChatHandoff::default();
//! let ctx = PageContext::new(&catalog, &handoff, PageControls::default());
//!
//! let mut state = PageState::load(None);
//! let effects = state.apply(PageEvent::ToggleTheme, &ctx);
//! assert_eq!(state.theme, ThemeMode::Dark);
//! assert_eq!(effects, vec![Effect::PersistTheme(ThemeMode::Dark)]);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FilterOutcome};
use crate::order::{ChatHandoff, OrderDialog, OrderRequest};
use crate::overlay::{OverlayClick, OverlaySlot};
use crate::types::{CardIndex, ProductCard, ThemeMode};

const fn present() -> bool {
    true
}

/// Which interactive controls the page layout provides.
///
/// A feature whose control is missing stays inert: its events leave the state
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    #[serde(default = "present")]
    pub theme_toggle: bool,
    #[serde(default = "present")]
    pub search_input: bool,
    #[serde(default = "present")]
    pub results_area: bool,
}

impl Default for PageControls {
    fn default() -> Self {
        Self {
            theme_toggle: true,
            search_input: true,
            results_area: true,
        }
    }
}

impl PageControls {
    /// Search needs both the input and somewhere to put results.
    #[must_use]
    pub const fn search_enabled(&self) -> bool {
        self.search_input && self.results_area
    }
}

/// A discrete user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ToggleTheme,
    /// New value of the search input.
    SearchInput(String),
    /// Order control activated on the card at this snapshot position.
    OrderClick(CardIndex),
    OverlayClick(OverlayClick),
}

/// Side effect the host must carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the mode to the persisted preference slot.
    PersistTheme(ThemeMode),
}

/// Read-only inputs shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub handoff: &'a ChatHandoff,
    pub controls: PageControls,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, handoff: &'a ChatHandoff, controls: PageControls) -> Self {
        Self {
            catalog,
            handoff,
            controls,
        }
    }
}

/// Per-visitor page state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub theme: ThemeMode,
    /// Raw value of the search input as last typed.
    pub query: String,
    pub overlay: OverlaySlot,
}

impl PageState {
    /// State of a freshly loaded page.
    ///
    /// `restored` is the persisted theme when the host restores it on load;
    /// otherwise the page starts light.
    #[must_use]
    pub fn load(restored: Option<ThemeMode>) -> Self {
        Self {
            theme: restored.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Apply one event to completion.
    pub fn apply(&mut self, event: PageEvent, ctx: &PageContext<'_>) -> Vec<Effect> {
        match event {
            PageEvent::ToggleTheme => {
                if !ctx.controls.theme_toggle {
                    return Vec::new();
                }
                vec![Effect::PersistTheme(self.toggle_theme())]
            }
            PageEvent::SearchInput(query) => {
                if ctx.controls.search_enabled() {
                    self.query = query;
                }
                Vec::new()
            }
            PageEvent::OrderClick(index) => {
                self.handle_order_click(index, ctx);
                Vec::new()
            }
            PageEvent::OverlayClick(target) => {
                self.overlay.click(target);
                Vec::new()
            }
        }
    }

    /// Flip the root theme and return the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Open the confirmation dialog for the card at `index`.
    ///
    /// An index outside the snapshot has no enclosing card and gets the
    /// fallback name and price.
    pub fn handle_order_click(&mut self, index: CardIndex, ctx: &PageContext<'_>) {
        let request = OrderRequest::from_card(ctx.catalog.card(index));
        self.show_modal(OrderDialog::confirm(&request, ctx.handoff));
    }

    /// Replace whatever overlay is open with `dialog`.
    pub fn show_modal(&mut self, dialog: OrderDialog) {
        self.overlay.show(dialog);
    }

    /// Current filter pass over the snapshot.
    #[must_use]
    pub fn filter(&self, catalog: &Catalog) -> FilterOutcome {
        catalog.filter(&self.query)
    }
}

/// Binds the order action to a rendered card.
///
/// Section cards and result copies go through the same binder, so every
/// rendered card carries an equivalent control.
pub trait ActionBinder {
    type Control;

    fn bind(&self, index: CardIndex, card: &ProductCard) -> Self::Control;
}

/// A rendered card and its bound action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<C> {
    pub index: CardIndex,
    pub card: ProductCard,
    pub action: C,
}

/// A rendered section container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<C> {
    pub heading: String,
    pub cards: Vec<CardView<C>>,
}

/// Content of the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView<C> {
    /// Filter inactive; the results container is hidden.
    Hidden,
    /// Copies of the matching cards in snapshot order.
    Cards(Vec<CardView<C>>),
    /// Single informational message for an active query with no matches.
    NoMatches { query: String },
}

impl<C> ResultsView<C> {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Text of the no-results message.
#[must_use]
pub fn no_matches_message(query: &str) -> String {
    format!("No products found matching \"{query}\".")
}

/// Everything the host needs to render the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<C> {
    pub theme: ThemeMode,
    pub query: String,
    pub controls: PageControls,
    pub sections_visible: bool,
    pub sections: Vec<SectionView<C>>,
    pub results: ResultsView<C>,
    pub overlay: Option<OrderDialog>,
}

impl<C> PageView<C> {
    /// Render step: derive the view from state and snapshot.
    pub fn build<B>(state: &PageState, ctx: &PageContext<'_>, binder: &B) -> Self
    where
        B: ActionBinder<Control = C>,
    {
        let card_view = |index: CardIndex, card: &ProductCard| CardView {
            index,
            card: card.clone(),
            action: binder.bind(index, card),
        };

        let sections = ctx
            .catalog
            .sections()
            .iter()
            .enumerate()
            .map(|(i, section)| SectionView {
                heading: section.heading.clone(),
                cards: ctx
                    .catalog
                    .section_cards(i)
                    .map(|(index, card)| card_view(index, card))
                    .collect(),
            })
            .collect();

        let results = match state.filter(ctx.catalog) {
            FilterOutcome::Inactive => ResultsView::Hidden,
            FilterOutcome::Matches(matches) => ResultsView::Cards(
                matches
                    .into_iter()
                    .filter_map(|index| ctx.catalog.card(index).map(|card| card_view(index, card)))
                    .collect(),
            ),
            FilterOutcome::NoMatches => ResultsView::NoMatches {
                query: state.query.clone(),
            },
        };

        Self {
            theme: state.theme,
            query: state.query.clone(),
            controls: ctx.controls,
            sections_visible: !results.is_visible(),
            sections,
            results,
            overlay: state.overlay.current().cloned(),
        }
    }
}
