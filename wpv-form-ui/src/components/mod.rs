//! Reusable Dioxus RSX components for the article query form.

mod article_form;
mod country_picker;
mod field_error;
mod toast_container;

pub use article_form::{ArticleForm, ArticleFormProps};
pub use country_picker::CountryPicker;
pub use field_error::FieldError;
pub use toast_container::ToastContainer;
