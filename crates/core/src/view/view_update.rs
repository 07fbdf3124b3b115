//! View update types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::notifications::{Notification, NotificationId};
use crate::search::SearchResults;
use crate::utils::format_amount;

/// Presentation changes produced by the core components.
///
/// These are facts about what the page should now show. A renderer adapter
/// translates them into whatever UI technology hosts the storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewUpdate {
    /// A search was issued and its results are pending.
    SearchLoading { query: String },

    /// Results for a query are ready to be shown.
    SearchResults { results: SearchResults },

    /// A cart line's total changed.
    LineTotal {
        line_id: String,
        amount: Decimal,
        /// Amount formatted for display (`$9.99`)
        display: String,
    },

    /// The cart grand total changed.
    GrandTotal { amount: Decimal, display: String },

    /// The cart badge in the navigation bar changed.
    CartBadge { count: u32 },

    /// An add-to-cart request is in flight; its button should be disabled.
    AddToCartPending { product_id: String },

    /// An add-to-cart request settled; its button should be restored.
    AddToCartReady { product_id: String },

    NotificationShown { notification: Notification },

    NotificationDismissed { id: NotificationId },
}

impl ViewUpdate {
    /// Creates a SearchLoading update.
    pub fn search_loading(query: impl Into<String>) -> Self {
        Self::SearchLoading {
            query: query.into(),
        }
    }

    /// Creates a SearchResults update.
    pub fn search_results(results: SearchResults) -> Self {
        Self::SearchResults { results }
    }

    /// Creates a LineTotal update, formatting the amount for display.
    pub fn line_total(line_id: impl Into<String>, amount: Decimal) -> Self {
        Self::LineTotal {
            line_id: line_id.into(),
            amount,
            display: format_amount(amount),
        }
    }

    /// Creates a GrandTotal update, formatting the amount for display.
    pub fn grand_total(amount: Decimal) -> Self {
        Self::GrandTotal {
            amount,
            display: format_amount(amount),
        }
    }

    pub fn cart_badge(count: u32) -> Self {
        Self::CartBadge { count }
    }

    pub fn add_to_cart_pending(product_id: impl Into<String>) -> Self {
        Self::AddToCartPending {
            product_id: product_id.into(),
        }
    }

    pub fn add_to_cart_ready(product_id: impl Into<String>) -> Self {
        Self::AddToCartReady {
            product_id: product_id.into(),
        }
    }

    pub fn notification_shown(notification: Notification) -> Self {
        Self::NotificationShown { notification }
    }

    pub fn notification_dismissed(id: NotificationId) -> Self {
        Self::NotificationDismissed { id }
    }
}
