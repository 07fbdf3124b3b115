//! Single-slot cancellable timer.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;

struct ScheduledFiring {
    generation: u64,
    handle: AbortHandle,
}

type Slot = Arc<Mutex<Option<ScheduledFiring>>>;

fn lock_slot(slot: &Slot) -> MutexGuard<'_, Option<ScheduledFiring>> {
    slot.lock().unwrap_or_else(|poisoned| {
        warn!("Pending timer mutex was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Owns at most one scheduled firing.
///
/// `reschedule` aborts the current firing before installing the new one, so
/// two firings never coexist. A firing claims the slot (by generation) before
/// running its action; a firing that was replaced or cancelled while waking up
/// finds the slot taken and does nothing.
///
/// Must be used from within a tokio runtime.
pub struct PendingTimer {
    slot: Slot,
    next_generation: AtomicU64,
}

impl PendingTimer {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            next_generation: AtomicU64::new(1),
        }
    }

    /// Cancels any pending firing and schedules `action` to run after `delay`.
    pub fn reschedule<F, Fut>(&self, delay: Duration, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut slot = lock_slot(&self.slot);
        if let Some(previous) = slot.take() {
            previous.handle.abort();
            debug!("Pending timer #{} replaced", previous.generation);
        }

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let task_slot = Arc::clone(&self.slot);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let claimed = {
                let mut slot = lock_slot(&task_slot);
                match slot.as_ref() {
                    Some(current) if current.generation == generation => {
                        *slot = None;
                        true
                    }
                    _ => false,
                }
            };

            if claimed {
                debug!("Pending timer #{} fired", generation);
                action().await;
            }
        });

        *slot = Some(ScheduledFiring {
            generation,
            handle: task.abort_handle(),
        });
    }

    /// Cancels the pending firing, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match lock_slot(&self.slot).take() {
            Some(previous) => {
                previous.handle.abort();
                debug!("Pending timer #{} cancelled", previous.generation);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        lock_slot(&self.slot).is_some()
    }
}

impl Default for PendingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PendingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter_action(counter: &Arc<AtomicUsize>) -> impl FnOnce() -> std::future::Ready<()> {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let timer = PendingTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        timer.reschedule(Duration::from_millis(500), counter_action(&fired));
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_previous() {
        let timer = PendingTimer::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        timer.reschedule(Duration::from_millis(500), counter_action(&first));
        tokio::time::sleep(Duration::from_millis(300)).await;
        timer.reschedule(Duration::from_millis(500), counter_action(&second));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let timer = PendingTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        assert!(!timer.cancel());
        timer.reschedule(Duration::from_millis(100), counter_action(&fired));
        assert!(timer.cancel());
        assert!(!timer.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
