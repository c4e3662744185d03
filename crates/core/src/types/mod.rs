//! Core types for the catalog page.

pub mod index;
pub mod product;
pub mod theme;

pub use index::CardIndex;
pub use product::ProductCard;
pub use theme::{THEME_STORAGE_KEY, ThemeError, ThemeMode};
