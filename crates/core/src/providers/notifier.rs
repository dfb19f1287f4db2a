use std::collections::VecDeque;
use std::sync::Mutex;

use super::traits::NotificationSink;

/// Writes each notification as a `tracing` error event. Handy for
/// headless sessions where nobody is looking at toasts.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn error(&self, message: &'static str) {
        tracing::error!(target: "storefront_cart::toast", "{message}");
    }
}

/// Buffers notifications until the UI drains them into toasts.
#[derive(Debug, Default)]
pub struct QueuedNotifier {
    queue: Mutex<VecDeque<&'static str>>,
}

impl QueuedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending message, oldest first.
    pub fn drain(&self) -> Vec<&'static str> {
        match self.queue.lock() {
            Ok(mut q) => q.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self.queue.lock() {
            Ok(q) => q.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for QueuedNotifier {
    fn error(&self, message: &'static str) {
        match self.queue.lock() {
            Ok(mut q) => q.push_back(message),
            Err(poisoned) => poisoned.into_inner().push_back(message),
        }
    }
}
