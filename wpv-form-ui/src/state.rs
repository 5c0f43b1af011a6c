//! Toast state shared via Dioxus context.
//!
//! The app provides a `ToastState` with `use_context_provider`; the form
//! retrieves it with `use_context::<ToastState>()` and reports through its
//! `Notifier` impl, while `ToastContainer` renders the queue.

use dioxus::prelude::*;
use wpv_form::notify::{Notifier, Severity, ToastOptions, ToastQueue};

#[derive(Clone, Copy)]
pub struct ToastState {
    /// Toasts currently on screen
    pub queue: Signal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::new()),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastState {
    fn notify(&self, severity: Severity, message: &str, options: &ToastOptions) {
        let mut queue = self.queue;
        let id = queue.write().push(severity, message, *options);
        log::debug!("Toast #{} ({}): {}", id, severity, message);
    }
}
