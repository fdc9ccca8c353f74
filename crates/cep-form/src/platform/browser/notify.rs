//! Toast notifications rendered by the app from a reactive slot.

use std::sync::atomic::{AtomicU64, Ordering};

use zoon::{Mutable, Task, Timer};

use crate::submission::{Notification, Notifier};

/// Bumped on every toast so a dismiss timer only clears its own toast.
static TOAST_GENERATION: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug, Default)]
pub struct ToastNotifier {
    current: Mutable<Option<Notification>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Mutable<Option<Notification>> {
        &self.current
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let generation = TOAST_GENERATION.fetch_add(1, Ordering::SeqCst) + 1;
        let duration_ms = notification.duration_ms;
        self.current.set(Some(notification));

        let current = self.current.clone();
        Task::start(async move {
            Timer::sleep(duration_ms).await;
            if TOAST_GENERATION.load(Ordering::SeqCst) == generation {
                current.set(None);
            }
        });
    }
}
