#[cfg(test)]
mod tests {
    use crate::cart::{AddToCartService, CartBackend, SimulatedCartBackend};
    use crate::constants::{ADD_TO_CART_FAILURE_MESSAGE, ADD_TO_CART_SUCCESS_MESSAGE};
    use crate::errors::{Error, Result};
    use crate::notifications::{NotificationLevel, NotificationService};
    use crate::view::{RecordingViewRenderer, ViewUpdate};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // --- Mock CartBackend ---
    #[derive(Default)]
    struct MockCartBackend {
        fail: bool,
        calls: Mutex<Vec<(String, u32)>>,
    }

    #[async_trait]
    impl CartBackend for MockCartBackend {
        async fn add_item(&self, product_id: &str, quantity: u32) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((product_id.to_string(), quantity));
            if self.fail {
                Err(Error::CartBackend("503 Service Unavailable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn service_with(
        backend: Arc<dyn CartBackend>,
    ) -> (AddToCartService, RecordingViewRenderer) {
        let renderer = RecordingViewRenderer::new();
        let shared: Arc<RecordingViewRenderer> = Arc::new(renderer.clone());
        let notifications = Arc::new(NotificationService::new(
            shared.clone(),
            Duration::from_millis(5000),
        ));
        (
            AddToCartService::new(backend, shared, notifications),
            renderer,
        )
    }

    fn notification_of(update: &ViewUpdate) -> Option<(NotificationLevel, String)> {
        match update {
            ViewUpdate::NotificationShown { notification } => {
                Some((notification.level, notification.message.clone()))
            }
            _ => None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_add_bumps_badge_and_notifies() {
        let backend = Arc::new(MockCartBackend::default());
        let (service, renderer) = service_with(backend.clone());

        let count = service.add_to_cart("p-42", "2").await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(service.badge_count(), 1);
        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec![("p-42".to_string(), 2)]
        );

        let updates = renderer.updates();
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0], ViewUpdate::add_to_cart_pending("p-42"));
        assert_eq!(updates[1], ViewUpdate::cart_badge(1));
        assert_eq!(
            notification_of(&updates[2]),
            Some((
                NotificationLevel::Success,
                ADD_TO_CART_SUCCESS_MESSAGE.to_string()
            ))
        );
        assert_eq!(updates[3], ViewUpdate::add_to_cart_ready("p-42"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_badge_is_seeded_from_page_text() {
        let backend = Arc::new(MockCartBackend::default());
        let (service, _renderer) = service_with(backend);
        let service = service.with_badge_text("3");

        assert_eq!(service.add_to_cart("p-1", 1u32).await.unwrap(), 4);
        assert_eq!(service.add_to_cart("p-2", 1u32).await.unwrap(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreadable_badge_text_starts_at_zero() {
        let (service, _renderer) = service_with(Arc::new(MockCartBackend::default()));
        assert_eq!(service.with_badge_text("").badge_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_quantity_is_clamped() {
        let backend = Arc::new(MockCartBackend::default());
        let (service, _renderer) = service_with(backend.clone());

        service.add_to_cart("p-9", "-1").await.unwrap();

        assert_eq!(*backend.calls.lock().unwrap(), vec![("p-9".to_string(), 1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_notifies_and_restores_button() {
        let backend = Arc::new(MockCartBackend {
            fail: true,
            ..MockCartBackend::default()
        });
        let (service, renderer) = service_with(backend);

        let result = service.add_to_cart("p-7", 1u32).await;

        assert!(matches!(result, Err(Error::CartBackend(_))));
        assert_eq!(service.badge_count(), 0);
        let updates = renderer.updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(
            notification_of(&updates[1]),
            Some((
                NotificationLevel::Error,
                ADD_TO_CART_FAILURE_MESSAGE.to_string()
            ))
        );
        assert_eq!(updates[2], ViewUpdate::add_to_cart_ready("p-7"));
        assert!(!updates
            .iter()
            .any(|u| matches!(u, ViewUpdate::CartBadge { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_product_id_is_rejected() {
        let (service, renderer) = service_with(Arc::new(MockCartBackend::default()));

        assert!(service.add_to_cart("", 1u32).await.is_err());
        assert!(renderer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_backend_waits_for_latency() {
        let backend = Arc::new(SimulatedCartBackend::new(Duration::from_millis(1000)));
        let (service, renderer) = service_with(backend);
        let started = tokio::time::Instant::now();

        service.add_to_cart("p-3", 1u32).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(renderer.last(), Some(ViewUpdate::add_to_cart_ready("p-3")));
    }
}
