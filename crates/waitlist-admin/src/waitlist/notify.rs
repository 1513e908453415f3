use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Notification surface the view reports to.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);

    /// The notification currently on screen, if the surface keeps one.
    fn current(&self) -> Option<Toast> {
        None
    }

    /// Close the current notification early, returning it.
    fn dismiss(&self) -> Option<Toast> {
        None
    }
}

/// The toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Default)]
struct ToastSlot {
    current: Option<Toast>,
    timer: Option<JoinHandle<()>>,
    next_id: u64,
}

impl ToastSlot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Single-slot toast that dismisses itself after a fixed delay.
///
/// A new toast replaces the current one and aborts its timer. Outside a tokio runtime the
/// toast is shown without a timer and stays until dismissed or replaced.
pub struct ToastNotifier {
    duration: Duration,
    slot: Arc<Mutex<ToastSlot>>,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            slot: Arc::new(Mutex::new(ToastSlot::default())),
        }
    }

    fn schedule_dismiss(&self, toast_id: u64) -> Option<JoinHandle<()>> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let slot = Arc::clone(&self.slot);
        let duration = self.duration;

        Some(handle.spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = slot.lock().expect("toast mutex poisoned");
            // A replaced toast's timer may already be past its abort point.
            if slot.current.as_ref().map(|toast| toast.id) == Some(toast_id) {
                slot.current = None;
                slot.timer = None;
                debug!(toast_id, "toast expired");
            }
        }))
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        let toast_id = {
            let mut slot = self.slot.lock().expect("toast mutex poisoned");
            slot.cancel_timer();
            slot.next_id += 1;
            let toast_id = slot.next_id;
            slot.current = Some(Toast {
                id: toast_id,
                message: message.to_string(),
            });
            toast_id
        };

        let timer = self.schedule_dismiss(toast_id);
        let mut slot = self.slot.lock().expect("toast mutex poisoned");
        if slot.current.as_ref().map(|toast| toast.id) == Some(toast_id) {
            slot.timer = timer;
        } else if let Some(timer) = timer {
            timer.abort();
        }

        info!(toast_id, toast = message, "toast shown");
    }

    fn current(&self) -> Option<Toast> {
        self.slot.lock().expect("toast mutex poisoned").current.clone()
    }

    fn dismiss(&self) -> Option<Toast> {
        let mut slot = self.slot.lock().expect("toast mutex poisoned");
        slot.cancel_timer();
        let dismissed = slot.current.take();
        if let Some(toast) = &dismissed {
            debug!(toast_id = toast.id, "toast dismissed");
        }
        dismissed
    }
}

impl Drop for ToastNotifier {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.cancel_timer();
        }
    }
}
