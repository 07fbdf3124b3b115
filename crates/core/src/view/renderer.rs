//! View renderer trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};

use super::ViewUpdate;

/// Trait for receiving view updates.
///
/// Implementations translate updates into UI changes. Core components call
/// `render()` synchronously from their handlers.
///
/// # Design Rules
///
/// - `render()` must be fast and non-blocking
/// - Rendering failures must not propagate back into the core (best-effort)
pub trait ViewRenderer: Send + Sync {
    /// Render a single update.
    fn render(&self, update: ViewUpdate);

    /// Render multiple updates in order.
    ///
    /// Default implementation calls `render()` for each update.
    fn render_batch(&self, updates: Vec<ViewUpdate>) {
        for update in updates {
            self.render(update);
        }
    }
}

/// No-op implementation for contexts that don't display anything.
#[derive(Clone, Default)]
pub struct NoOpViewRenderer;

impl ViewRenderer for NoOpViewRenderer {
    fn render(&self, _update: ViewUpdate) {}
}

/// Renderer that logs every update as JSON at info level.
#[derive(Clone, Default)]
pub struct LoggingViewRenderer;

impl ViewRenderer for LoggingViewRenderer {
    fn render(&self, update: ViewUpdate) {
        match serde_json::to_string(&update) {
            Ok(json) => info!("view update: {}", json),
            Err(e) => warn!("view update {:?} could not be serialized: {}", update, e),
        }
    }
}

/// Recording renderer for tests and headless adapters - collects updates.
#[derive(Clone, Default)]
pub struct RecordingViewRenderer {
    updates: Arc<Mutex<Vec<ViewUpdate>>>,
}

impl RecordingViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_updates(&self) -> MutexGuard<'_, Vec<ViewUpdate>> {
        self.updates.lock().unwrap_or_else(|poisoned| {
            warn!("Recording renderer mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Returns all recorded updates.
    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.lock_updates().clone()
    }

    /// Returns the most recent update, if any.
    pub fn last(&self) -> Option<ViewUpdate> {
        self.lock_updates().last().cloned()
    }

    /// Clears recorded updates.
    pub fn clear(&self) {
        self.lock_updates().clear();
    }

    /// Returns the number of recorded updates.
    pub fn len(&self) -> usize {
        self.lock_updates().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock_updates().is_empty()
    }
}

impl ViewRenderer for RecordingViewRenderer {
    fn render(&self, update: ViewUpdate) {
        self.lock_updates().push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_renderer_does_not_panic() {
        let renderer = NoOpViewRenderer;
        renderer.render(ViewUpdate::cart_badge(1));
        renderer.render_batch(vec![
            ViewUpdate::search_loading("ram"),
            ViewUpdate::cart_badge(2),
        ]);
    }

    #[test]
    fn test_logging_renderer_does_not_panic() {
        LoggingViewRenderer.render(ViewUpdate::add_to_cart_pending("p-1"));
    }

    #[test]
    fn test_recording_renderer_collects_updates() {
        let renderer = RecordingViewRenderer::new();
        assert!(renderer.is_empty());

        renderer.render(ViewUpdate::cart_badge(1));
        assert_eq!(renderer.len(), 1);

        renderer.render_batch(vec![
            ViewUpdate::search_loading("gpu"),
            ViewUpdate::cart_badge(2),
        ]);
        assert_eq!(renderer.len(), 3);
        assert_eq!(renderer.last(), Some(ViewUpdate::cart_badge(2)));

        renderer.clear();
        assert!(renderer.is_empty());
    }
}
