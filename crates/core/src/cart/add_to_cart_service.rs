use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use log::{info, warn};

use super::cart_model::QuantityInput;
use super::cart_traits::CartBackend;
use crate::constants::{ADD_TO_CART_FAILURE_MESSAGE, ADD_TO_CART_SUCCESS_MESSAGE};
use crate::errors::{Result, ValidationError};
use crate::notifications::NotificationService;
use crate::utils::parse_leading_int;
use crate::view::{ViewRenderer, ViewUpdate};

/// Handles "Add to Cart" submissions: disables the product's button while the
/// request is in flight, bumps the cart badge on success and reports the
/// outcome through a notification.
pub struct AddToCartService {
    backend: Arc<dyn CartBackend>,
    renderer: Arc<dyn ViewRenderer>,
    notifications: Arc<NotificationService>,
    badge_count: AtomicU32,
}

impl AddToCartService {
    pub fn new(
        backend: Arc<dyn CartBackend>,
        renderer: Arc<dyn ViewRenderer>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            backend,
            renderer,
            notifications,
            badge_count: AtomicU32::new(0),
        }
    }

    /// Seeds the badge count from the badge text currently on the page
    /// (0 when it holds no number).
    pub fn with_badge_text(self, badge_text: &str) -> Self {
        let count = parse_leading_int(badge_text)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        self.badge_count.store(count, Ordering::SeqCst);
        self
    }

    pub fn badge_count(&self) -> u32 {
        self.badge_count.load(Ordering::SeqCst)
    }

    /// Submits one add-to-cart request and returns the badge count afterwards.
    ///
    /// The quantity follows the clamp-to-floor policy. Backend failures are
    /// reported to the user and returned; the badge is left unchanged.
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        raw_quantity: impl Into<QuantityInput>,
    ) -> Result<u32> {
        if product_id.is_empty() {
            return Err(ValidationError::MissingField("product_id".to_string()).into());
        }
        let quantity = raw_quantity.into().resolve();

        self.renderer
            .render(ViewUpdate::add_to_cart_pending(product_id));
        let outcome = self.backend.add_item(product_id, quantity).await;

        let result = match outcome {
            Ok(()) => {
                let count = self
                    .badge_count
                    .fetch_add(1, Ordering::SeqCst)
                    .saturating_add(1);
                info!("Added {} x '{}' to cart", quantity, product_id);
                self.renderer.render(ViewUpdate::cart_badge(count));
                self.notifications.success(ADD_TO_CART_SUCCESS_MESSAGE);
                Ok(count)
            }
            Err(e) => {
                warn!("Add to cart failed for '{}': {}", product_id, e);
                self.notifications.error(ADD_TO_CART_FAILURE_MESSAGE);
                Err(e)
            }
        };

        self.renderer
            .render(ViewUpdate::add_to_cart_ready(product_id));
        result
    }
}
