use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use super::notification_model::{Notification, NotificationId, NotificationLevel};
use crate::view::{ViewRenderer, ViewUpdate};

type ActiveMap = Arc<Mutex<HashMap<NotificationId, AbortHandle>>>;

fn lock_active(active: &ActiveMap) -> MutexGuard<'_, HashMap<NotificationId, AbortHandle>> {
    active.lock().unwrap_or_else(|poisoned| {
        warn!("Notification registry mutex was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Shows toast notifications and dismisses them after a fixed TTL.
///
/// Whoever removes an id from the registry first (the auto-dismiss timer or
/// `dismiss`) renders the dismissal; the other side becomes a no-op.
/// Must be used from within a tokio runtime.
pub struct NotificationService {
    renderer: Arc<dyn ViewRenderer>,
    ttl: Duration,
    active: ActiveMap,
}

impl NotificationService {
    pub fn new(renderer: Arc<dyn ViewRenderer>, ttl: Duration) -> Self {
        Self {
            renderer,
            ttl,
            active: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn show(&self, message: impl Into<String>, level: NotificationLevel) -> NotificationId {
        let notification = Notification::new(message, level);
        let id = notification.id;

        // The expiry countdown starts once the toast has been rendered, so a
        // dismissal can never be rendered ahead of it.
        let (shown_tx, shown_rx) = oneshot::channel::<()>();
        let registry = Arc::clone(&self.active);
        let renderer = Arc::clone(&self.renderer);
        let ttl = self.ttl;
        let task = tokio::spawn(async move {
            let _ = shown_rx.await;
            tokio::time::sleep(ttl).await;
            let removed = lock_active(&registry).remove(&id).is_some();
            if removed {
                debug!("Notification {} expired", id);
                renderer.render(ViewUpdate::notification_dismissed(id));
            }
        });
        lock_active(&self.active).insert(id, task.abort_handle());

        self.renderer
            .render(ViewUpdate::notification_shown(notification));
        let _ = shown_tx.send(());

        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationLevel::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationLevel::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, NotificationLevel::Error)
    }

    /// Dismisses a visible notification early. Returns `false` when it was
    /// already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let Some(handle) = lock_active(&self.active).remove(&id) else {
            return false;
        };
        handle.abort();
        debug!("Notification {} dismissed", id);
        self.renderer.render(ViewUpdate::notification_dismissed(id));
        true
    }

    /// Number of notifications currently visible.
    pub fn active_count(&self) -> usize {
        lock_active(&self.active).len()
    }
}

impl Drop for NotificationService {
    fn drop(&mut self) {
        for (_, handle) in lock_active(&self.active).drain() {
            handle.abort();
        }
    }
}
