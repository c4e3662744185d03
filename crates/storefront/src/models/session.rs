//! Session-related types.
//!
//! The visitor's session holds two independent entries: the persisted theme
//! preference, which outlives page loads, and the state of the page currently
//! on screen, which every page load replaces.

/// Session keys.
pub mod keys {
    /// Persisted theme preference (`light-mode` / `dark-mode`).
    pub const THEME: &str = bytemart_core::THEME_STORAGE_KEY;

    /// Serialized `PageState` of the page on screen.
    pub const PAGE_STATE: &str = "page_state";
}
