//! Session middleware configuration and helpers.
//!
//! Sets up in-memory sessions using tower-sessions. The session is the
//! visitor's key-value storage scope: it carries the persisted theme
//! preference and the state of the page on screen between events.

use bytemart_core::{PageState, ThemeMode};
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::StorefrontConfig;
use crate::models::session_keys;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bm_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Write the theme to the persisted preference slot.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn persist_theme(
    session: &Session,
    mode: ThemeMode,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::THEME, mode.storage_value()).await
}

/// Read the persisted theme preference.
///
/// Values other than `light-mode` / `dark-mode` are ignored with a warning.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn persisted_theme(
    session: &Session,
) -> Result<Option<ThemeMode>, tower_sessions::session::Error> {
    let Some(stored) = session.get::<String>(session_keys::THEME).await? else {
        return Ok(None);
    };

    match stored.parse::<ThemeMode>() {
        Ok(mode) => Ok(Some(mode)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring persisted theme");
            Ok(None)
        }
    }
}

/// Load the state of the page on screen.
///
/// A visitor without stored state gets a freshly loaded page.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_page_state(
    session: &Session,
) -> Result<PageState, tower_sessions::session::Error> {
    Ok(session
        .get::<PageState>(session_keys::PAGE_STATE)
        .await?
        .unwrap_or_default())
}

/// Store the state of the page on screen.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_page_state(
    session: &Session,
    state: &PageState,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::PAGE_STATE, state).await
}
