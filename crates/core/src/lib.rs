//! ByteMart+ Core - Catalog page state.
//!
//! This crate holds everything the catalog page does, independent of how the
//! page is delivered:
//! - [`types`] - Theme mode, product cards and positional card indices
//! - [`catalog`] - The fixed card snapshot and the name filter
//! - [`order`] - Order requests, chat handoff links and the confirmation dialog
//! - [`overlay`] - The single overlay slot and its dismissal rules
//! - [`page`] - Page state, events and the rendered view model
//!
//! # Architecture
//!
//! The core crate contains no I/O, no HTTP, no storage. Hosts apply
//! [`page::PageEvent`]s to a [`page::PageState`] and carry out the returned
//! [`page::Effect`]s themselves.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod order;
pub mod overlay;
pub mod page;
pub mod types;

pub use catalog::{Catalog, CatalogSection, FilterOutcome, normalize_query};
pub use order::{ChatHandoff, OrderDialog, OrderRequest};
pub use overlay::{OverlayClick, OverlaySlot};
pub use page::{
    ActionBinder, CardView, Effect, PageContext, PageControls, PageEvent, PageState, PageView,
    ResultsView, SectionView,
};
pub use types::*;
