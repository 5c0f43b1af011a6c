//! Headless core of the article query form.
//!
//! The form collects a country, a date and an access type for the Wikimedia
//! "top articles per country" query. This crate holds everything that does
//! not need a browser:
//! - `form` / `model`: field values, updates, validation and submission
//! - `location`: the mount-time geolocation → country resolution
//! - `notify`: toast options, the `Notifier` trait and a toast queue
//! - `regions`: the continent/country table behind the picker
//! - `lookup`: reverse geocoding over HTTP (feature `api`)

pub mod access;
pub mod form;
pub mod location;
pub mod lookup;
pub mod model;
pub mod notify;
pub mod regions;
pub mod selection;
pub mod submit;

pub use access::Access;
pub use form::{validate, FormError, FormErrors, FormField, FormState};
pub use location::{
    resolve_location, Coordinates, CountryLookup, GeolocationProvider, Lifetime, LocationError,
    LocationOutcome,
};
pub use model::ArticleFormModel;
pub use notify::{Notifier, Severity, ToastOptions, ToastPosition, ToastQueue};
pub use selection::PickerSelection;
pub use submit::{prepare_submission, SubmitOutcome, SubmitPayload};
