//! Order requests and the chat handoff.
//!
//! An order never leaves this system as a request. Activating a card's order
//! control produces an [`OrderDialog`] whose primary link opens a chat with a
//! pre-filled message; the visitor completes the purchase there.

use serde::{Deserialize, Serialize};

use crate::types::ProductCard;

/// Name used when a card has no display title.
pub const FALLBACK_PRODUCT_NAME: &str = "Unknown Product";

/// Price used when a card has no display price.
pub const FALLBACK_PRODUCT_PRICE: &str = "Price Unknown";

/// Default chat deep link, including the recipient.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://wa.me/256779315934";

/// Title of the confirmation dialog.
pub const DIALOG_TITLE: &str = "Confirm Your Order";

/// Name and price of the card an order action came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub product_name: String,
    pub product_price: String,
}

impl OrderRequest {
    /// Build a request from the enclosing card, if any.
    ///
    /// Missing or empty fields fall back to fixed text rather than failing.
    #[must_use]
    pub fn from_card(card: Option<&ProductCard>) -> Self {
        Self {
            product_name: card
                .and_then(ProductCard::display_title)
                .unwrap_or(FALLBACK_PRODUCT_NAME)
                .to_string(),
            product_price: card
                .and_then(ProductCard::display_price)
                .unwrap_or(FALLBACK_PRODUCT_PRICE)
                .to_string(),
        }
    }

    /// Message pre-filled into the chat.
    #[must_use]
    pub fn chat_message(&self) -> String {
        format!(
            "Hello ByteMart+! I would like to order the **{}** priced at {}.",
            self.product_name, self.product_price
        )
    }

    /// Body text of the confirmation dialog.
    #[must_use]
    pub fn confirmation_text(&self) -> String {
        format!(
            "You are about to place an order for the {}. Click \"Chat to Order\" to confirm the purchase on WhatsApp.",
            self.product_name
        )
    }
}

/// Outbound chat link builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHandoff {
    base_url: String,
}

impl ChatHandoff {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>?text=<percent-encoded message>`.
    #[must_use]
    pub fn link(&self, request: &OrderRequest) -> String {
        format!(
            "{}?text={}",
            self.base_url,
            urlencoding::encode(&request.chat_message())
        )
    }
}

impl Default for ChatHandoff {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_BASE_URL)
    }
}

/// Content of the order confirmation overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDialog {
    pub title: String,
    pub message: String,
    /// Primary action; opens in a new browsing context.
    pub link: String,
}

impl OrderDialog {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            link: link.into(),
        }
    }

    /// The confirmation dialog for one order request.
    #[must_use]
    pub fn confirm(request: &OrderRequest, handoff: &ChatHandoff) -> Self {
        Self::new(
            DIALOG_TITLE,
            request.confirmation_text(),
            handoff.link(request),
        )
    }
}
