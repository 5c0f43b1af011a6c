//! Dioxus components and browser bindings for the article query form.
//!
//! This crate provides:
//! - `browser`: web-sys geolocation, timers and URL parameters
//! - `state`: the toast context, which doubles as the form's `Notifier`
//! - `components`: `ArticleForm`, `CountryPicker`, `ToastContainer`, `FieldError`

pub mod browser;
pub mod components;
pub mod state;
