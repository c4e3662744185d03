//! Two-valued visual theme.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key of the persisted preference slot holding the last chosen theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Errors that can occur when parsing a stored [`ThemeMode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The stored value is neither `light-mode` nor `dark-mode`.
    #[error("unknown theme value: {0}")]
    Unknown(String),
}

/// Visual theme of the page root.
///
/// Serializes to the class marker (`light-mode` / `dark-mode`), which is also
/// the value written to the persisted preference slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    #[serde(rename = "light-mode")]
    Light,
    #[serde(rename = "dark-mode")]
    Dark,
}

impl ThemeMode {
    /// The other mode: dark becomes light, anything else becomes dark.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class marker placed on the document root.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    /// Value of the root's `data-theme` attribute.
    #[must_use]
    pub const fn data_theme(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value written to the persisted preference slot.
    #[must_use]
    pub const fn storage_value(self) -> &'static str {
        self.class_name()
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light-mode" => Ok(Self::Light),
            "dark-mode" => Ok(Self::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_markers() {
        assert_eq!(ThemeMode::Dark.class_name(), "dark-mode");
        assert_eq!(ThemeMode::Dark.data_theme(), "dark");
        assert_eq!(ThemeMode::Light.class_name(), "light-mode");
        assert_eq!(ThemeMode::Light.data_theme(), "light");
    }

    #[test]
    fn test_storage_value_parses_back() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.storage_value().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_rejects_bare_names() {
        assert_eq!(
            "dark".parse::<ThemeMode>(),
            Err(ThemeError::Unknown("dark".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_class_marker() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark-mode\""
        );
        let mode: ThemeMode = serde_json::from_str("\"light-mode\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
