//! Toast notifications: options, the reporter trait and a queue model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delay before a toast closes itself when no other value is given.
pub const DEFAULT_AUTO_CLOSE_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopCenter,
    TopLeft,
    BottomRight,
    BottomCenter,
    BottomLeft,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopRight,
        ToastPosition::TopCenter,
        ToastPosition::TopLeft,
        ToastPosition::BottomRight,
        ToastPosition::BottomCenter,
        ToastPosition::BottomLeft,
    ];

    /// Inline CSS anchoring a toast stack at this position.
    pub fn css(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top: 16px; right: 16px;",
            ToastPosition::TopCenter => "top: 16px; left: 50%; transform: translateX(-50%);",
            ToastPosition::TopLeft => "top: 16px; left: 16px;",
            ToastPosition::BottomRight => "bottom: 16px; right: 16px;",
            ToastPosition::BottomCenter => {
                "bottom: 16px; left: 50%; transform: translateX(-50%);"
            }
            ToastPosition::BottomLeft => "bottom: 16px; left: 16px;",
        }
    }
}

/// How a toast is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    /// Milliseconds before the toast closes itself; `None` keeps it until
    /// the user dismisses it.
    pub auto_close: Option<u32>,
    pub position: ToastPosition,
    pub hide_progress_bar: bool,
    pub draggable: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            auto_close: Some(DEFAULT_AUTO_CLOSE_MS),
            position: ToastPosition::TopRight,
            hide_progress_bar: false,
            draggable: true,
        }
    }
}

impl ToastOptions {
    /// Sticky top-right toast without progress bar, used for location failures.
    pub fn geolocation_failure() -> Self {
        Self {
            auto_close: None,
            position: ToastPosition::TopRight,
            hide_progress_bar: true,
            draggable: true,
        }
    }

    /// Top-center toast for a rejected submission.
    pub fn validation_failure() -> Self {
        Self {
            position: ToastPosition::TopCenter,
            ..Self::default()
        }
    }
}

/// Reports messages to the user.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str, options: &ToastOptions);

    fn error(&self, message: &str, options: &ToastOptions) {
        self.notify(Severity::Error, message, options);
    }

    fn warning(&self, message: &str, options: &ToastOptions) {
        self.notify(Severity::Warning, message, options);
    }

    fn info(&self, message: &str, options: &ToastOptions) {
        self.notify(Severity::Info, message, options);
    }

    fn success(&self, message: &str, options: &ToastOptions) {
        self.notify(Severity::Success, message, options);
    }
}

/// Notifier that writes to the `log` facade instead of a UI.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str, _options: &ToastOptions) {
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Info | Severity::Success => log::info!("{}", message),
        }
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub options: ToastOptions,
}

/// Ordered set of visible toasts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id.
    pub fn push(&mut self, severity: Severity, message: &str, options: ToastOptions) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            message: message.to_string(),
            options,
        });
        id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Toasts anchored at `position`, oldest first.
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &Toast> {
        self.toasts
            .iter()
            .filter(move |toast| toast.options.position == position)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Notifier that keeps every call for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub calls: RefCell<Vec<(Severity, String, ToastOptions)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(_, message, _)| message.clone())
                .collect()
        }

        pub fn count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, severity: Severity, message: &str, options: &ToastOptions) {
            self.calls
                .borrow_mut()
                .push((severity, message.to_string(), *options));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn test_presets() {
        let sticky = ToastOptions::geolocation_failure();
        assert_eq!(sticky.auto_close, None);
        assert_eq!(sticky.position, ToastPosition::TopRight);
        assert!(sticky.hide_progress_bar);

        let validation = ToastOptions::validation_failure();
        assert_eq!(validation.position, ToastPosition::TopCenter);
        assert_eq!(validation.auto_close, Some(DEFAULT_AUTO_CLOSE_MS));
        assert!(!validation.hide_progress_bar);
        assert!(validation.draggable);
    }

    #[test]
    fn test_severity_helpers_route_to_notify() {
        let notifier = RecordingNotifier::default();
        notifier.error("boom", &ToastOptions::default());
        notifier.success("ok", &ToastOptions::default());
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].0, Severity::Error);
        assert_eq!(calls[1].0, Severity::Success);
    }

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Severity::Error, "a", ToastOptions::geolocation_failure());
        let second = queue.push(Severity::Error, "b", ToastOptions::validation_failure());
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn test_queue_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new();
        let id = queue.push(Severity::Info, "a", ToastOptions::default());
        queue.dismiss(id);
        let next = queue.push(Severity::Info, "b", ToastOptions::default());
        assert!(next > id);
    }

    #[test]
    fn test_queue_groups_by_position() {
        let mut queue = ToastQueue::new();
        queue.push(Severity::Error, "right", ToastOptions::geolocation_failure());
        queue.push(Severity::Error, "center", ToastOptions::validation_failure());
        let centered: Vec<_> = queue
            .at(ToastPosition::TopCenter)
            .map(|t| t.message.as_str())
            .collect();
        assert_eq!(centered, vec!["center"]);
    }
}
