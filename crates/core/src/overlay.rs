//! The single overlay slot.

use serde::{Deserialize, Serialize};

use crate::order::OrderDialog;

/// Where a click on an open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayClick {
    /// The explicit close control.
    Close,
    /// The backdrop around the dialog content.
    Background,
    /// Anywhere inside the dialog content.
    Content,
}

impl OverlayClick {
    /// Whether a click on this target dismisses the overlay.
    #[must_use]
    pub const fn dismisses(self) -> bool {
        matches!(self, Self::Close | Self::Background)
    }
}

/// Holds at most one dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySlot {
    current: Option<OrderDialog>,
}

impl OverlaySlot {
    /// Show a dialog, removing whatever was shown before.
    ///
    /// Returns the replaced dialog, if any.
    pub fn show(&mut self, dialog: OrderDialog) -> Option<OrderDialog> {
        self.current.replace(dialog)
    }

    /// Apply a click; returns `true` if the overlay was removed.
    pub fn click(&mut self, target: OverlayClick) -> bool {
        if target.dismisses() {
            self.current.take().is_some()
        } else {
            false
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&OrderDialog> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
