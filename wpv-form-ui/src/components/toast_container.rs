//! Fixed-position toast stacks.

use crate::browser;
use crate::state::ToastState;
use dioxus::prelude::*;
use wpv_form::notify::{Severity, Toast, ToastPosition};

const PROGRESS_KEYFRAMES: &str =
    "@keyframes wpv-toast-progress { from { width: 100%; } to { width: 0%; } }";

/// Renders every queued toast, grouped by position. Mount once near the root.
#[component]
pub fn ToastContainer() -> Element {
    let state = use_context::<ToastState>();
    let stacks: Vec<(&'static str, Vec<Toast>)> = {
        let queue = state.queue.read();
        ToastPosition::ALL
            .iter()
            .map(|position| (position.css(), queue.at(*position).cloned().collect::<Vec<_>>()))
            .filter(|(_, toasts)| !toasts.is_empty())
            .collect()
    };

    rsx! {
        style { "{PROGRESS_KEYFRAMES}" }
        for (css, toasts) in stacks {
            div {
                key: "{css}",
                style: "position: fixed; z-index: 9999; display: flex; flex-direction: column; gap: 8px; width: 320px; {css}",
                for toast in toasts {
                    ToastItem { key: "{toast.id}", toast: toast.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let state = use_context::<ToastState>();
    let id = toast.id;
    let auto_close = toast.options.auto_close;

    // Auto-close timer lives as long as the toast is shown
    use_hook(move || {
        if let Some(ms) = auto_close {
            spawn(async move {
                browser::sleep_ms(ms).await;
                state.dismiss(id);
            });
        }
    });

    let (background, border) = match toast.severity {
        Severity::Error => ("#FFEBEE", "#EF9A9A"),
        Severity::Warning => ("#FFF8E1", "#FFE082"),
        Severity::Success => ("#E8F5E9", "#A5D6A7"),
        Severity::Info => ("#E3F2FD", "#90CAF9"),
    };
    let show_progress = !toast.options.hide_progress_bar && auto_close.is_some();
    let duration = auto_close.unwrap_or_default();

    rsx! {
        div {
            role: "alert",
            style: "position: relative; overflow: hidden; padding: 12px 32px 12px 16px; background: {background}; border: 1px solid {border}; border-radius: 4px; color: #212121; font-size: 14px;",
            "{toast.message}"
            button {
                r#type: "button",
                title: "Fermer",
                style: "position: absolute; top: 4px; right: 6px; border: none; background: transparent; cursor: pointer; font-size: 16px;",
                onclick: move |_| state.dismiss(id),
                "×"
            }
            if show_progress {
                div {
                    style: "position: absolute; left: 0; bottom: 0; height: 3px; background: {border}; animation: wpv-toast-progress {duration}ms linear forwards;",
                }
            }
        }
    }
}
