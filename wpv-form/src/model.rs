//! Headless state of the article query form.
//!
//! `ArticleFormModel` owns everything the form mutates: the field values,
//! the validation errors and the picker selection. Each handler is a small
//! state transition, so the UI layer only has to forward events and the
//! behaviour can be exercised without a browser.

use crate::form::{FormError, FormErrors, FormField, FormState};
use crate::notify::{Notifier, ToastOptions};
use crate::selection::PickerSelection;
use crate::submit::{prepare_submission, SubmitOutcome, SubmitPayload};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFormModel {
    pub form: FormState,
    pub errors: FormErrors,
    pub selection: PickerSelection,
}

impl ArticleFormModel {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_form(FormState::new(today))
    }

    pub fn for_current_week() -> Self {
        Self::with_form(FormState::for_current_week())
    }

    fn with_form(form: FormState) -> Self {
        Self {
            form,
            errors: FormErrors::default(),
            selection: PickerSelection::default(),
        }
    }

    /// Date or access input changed.
    pub fn change_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        self.form = self.form.with_field(field, value)?;
        Ok(())
    }

    /// The picker reported a country; it goes to the form together with the
    /// continent currently shown.
    pub fn pick_country(&mut self, country: &str) {
        self.form = self
            .form
            .with_country_and_continent(country, &self.selection.continent);
        self.selection.country = country.to_string();
    }

    pub fn pick_continent(&mut self, continent: &str) {
        self.selection.continent = continent.to_string();
    }

    /// Host page supplied a country and/or continent. Only the picker moves.
    pub fn apply_external_defaults(&mut self, country: Option<&str>, continent: Option<&str>) {
        self.selection.apply_external(country, continent);
    }

    /// Geolocation found the user's country.
    pub fn apply_located_country(&mut self, code: &str) {
        self.form = self.form.with_country(code);
        self.selection.show_country(code);
    }

    /// Validate and either fire `on_submit` or record the errors.
    ///
    /// A rejected submission raises exactly one notification, carrying the
    /// date message (empty when only the country is missing).
    pub fn submit<N, F>(&mut self, notifier: &N, on_submit: F) -> bool
    where
        N: Notifier + ?Sized,
        F: FnOnce(SubmitPayload),
    {
        match prepare_submission(&self.form) {
            SubmitOutcome::Invalid(errors) => {
                let message = errors.get(FormField::Date).unwrap_or_default();
                notifier.error(message, &ToastOptions::validation_failure());
                log::debug!("Rejected submission with {} error(s)", errors.len());
                self.errors = errors;
                false
            }
            SubmitOutcome::Valid(payload) => {
                self.errors = FormErrors::default();
                log::info!(
                    "Submitting {} / {} / {}",
                    payload.country,
                    payload.access,
                    payload.date
                );
                on_submit(payload);
                true
            }
        }
    }
}
