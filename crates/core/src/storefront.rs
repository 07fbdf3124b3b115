//! Composition root wiring the core components to one renderer.

use std::sync::Arc;

use log::info;

use crate::cart::{
    AddToCartService, CartLine, CartRecalculationEngine, CartStateTrait, InMemoryCartState,
    SimulatedCartBackend,
};
use crate::config::StorefrontConfig;
use crate::notifications::NotificationService;
use crate::search::{SearchDispatcher, SimulatedSearchBackend};
use crate::view::ViewRenderer;

/// Page-level state: one instance per rendered storefront page.
pub struct Storefront {
    pub config: StorefrontConfig,
    pub cart_state: Arc<InMemoryCartState>,
    pub search: SearchDispatcher,
    pub cart: CartRecalculationEngine,
    pub add_to_cart: AddToCartService,
    pub notifications: Arc<NotificationService>,
}

impl Storefront {
    /// Builds the page state on the simulated backends.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_simulated_backends(
        config: StorefrontConfig,
        renderer: Arc<dyn ViewRenderer>,
        cart_lines: Vec<CartLine>,
        badge_text: &str,
    ) -> Self {
        let cart_state = Arc::new(InMemoryCartState::new(cart_lines));
        let notifications = Arc::new(NotificationService::new(
            renderer.clone(),
            config.notification_ttl,
        ));

        let search = SearchDispatcher::new(
            Arc::new(SimulatedSearchBackend::new(config.search_latency)),
            renderer.clone(),
            &config,
        );
        let cart = CartRecalculationEngine::new(cart_state.clone(), renderer.clone());
        let add_to_cart = AddToCartService::new(
            Arc::new(SimulatedCartBackend::new(config.add_to_cart_latency)),
            renderer,
            notifications.clone(),
        )
        .with_badge_text(badge_text);

        info!(
            "Storefront ready: {} cart line(s), debounce {}ms",
            cart_state.lines().len(),
            config.search_debounce.as_millis()
        );

        Self {
            config,
            cart_state,
            search,
            cart,
            add_to_cart,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DispatcherState, SearchResults};
    use crate::view::{RecordingViewRenderer, ViewUpdate};
    use rust_decimal_macros::dec;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_page_flow_on_simulated_backends() {
        let renderer = RecordingViewRenderer::new();
        let lines = vec![
            CartLine::from_raw("ram", "10.00", "2"),
            CartLine::from_raw("fan", "2.50", "3"),
        ];
        let page = Storefront::with_simulated_backends(
            StorefrontConfig::default(),
            Arc::new(renderer.clone()),
            lines,
            "0",
        );

        assert_eq!(page.cart.recalculate_all(), dec!(27.50));

        page.search.on_input("m");
        page.search.on_input("mo");
        sleep(Duration::from_millis(1600)).await;
        assert_eq!(page.search.state(), DispatcherState::Displayed);
        assert_eq!(page.search.displayed(), Some(SearchResults::empty("mo")));

        assert_eq!(page.add_to_cart.add_to_cart("fan", "1").await.unwrap(), 1);
        assert_eq!(page.notifications.active_count(), 1);
        sleep(Duration::from_millis(5001)).await;
        assert_eq!(page.notifications.active_count(), 0);

        assert!(renderer
            .updates()
            .contains(&ViewUpdate::grand_total(dec!(27.50))));
    }
}
