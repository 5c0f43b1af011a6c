//! Inline validation message shown under a field.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldErrorProps {
    pub message: String,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        div {
            class: "error",
            style: "margin-top: 4px; font-size: 12px; color: #C62828;",
            "{props.message}"
        }
    }
}
