//! Form state, field updates and validation.

use crate::access::Access;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use wpv_utils::dates;

pub const COUNTRY_REQUIRED: &str = "Country is required";
pub const DATE_REQUIRED: &str = "La date est requise";

/// Fields of the form, named after the `name` attribute of their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Country,
    Date,
    Access,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Country => "country",
            FormField::Date => "date",
            FormField::Access => "access",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while applying a field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    InvalidAccess(String),
    InvalidDate(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidAccess(value) => write!(f, "invalid access value: {value}"),
            FormError::InvalidDate(value) => write!(f, "invalid date: {value}"),
        }
    }
}

impl std::error::Error for FormError {}

/// Values collected by the article query form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub country: String,
    /// "YYYY-MM-DD", or empty if the user cleared the input.
    pub date: String,
    pub access: Access,
    /// Set alongside `country` when the picker reports a choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

impl FormState {
    /// Initial state for a form mounted on `today`: no country, the Monday of
    /// the current week, every access type.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            country: String::new(),
            date: dates::format_date(&dates::week_start(&today)),
            access: Access::default(),
            continent: None,
        }
    }

    /// Initial state using the local clock.
    pub fn for_current_week() -> Self {
        Self {
            country: String::new(),
            date: dates::current_week_start(),
            access: Access::default(),
            continent: None,
        }
    }

    /// Copy of this state with one field replaced.
    ///
    /// A date must be empty or a real "YYYY-MM-DD" calendar day.
    pub fn with_field(&self, field: FormField, value: &str) -> Result<Self, FormError> {
        let mut next = self.clone();
        match field {
            FormField::Country => next.country = value.to_string(),
            FormField::Date => {
                if !value.is_empty() && dates::parse_date(value).is_err() {
                    return Err(FormError::InvalidDate(value.to_string()));
                }
                next.date = value.to_string();
            }
            FormField::Access => next.access = value.parse()?,
        }
        Ok(next)
    }

    /// Copy of this state carrying the picker's country and continent.
    pub fn with_country_and_continent(&self, country: &str, continent: &str) -> Self {
        Self {
            country: country.to_string(),
            continent: Some(continent.to_string()),
            ..self.clone()
        }
    }

    /// Copy of this state with only the country replaced.
    pub fn with_country(&self, country: &str) -> Self {
        Self {
            country: country.to_string(),
            ..self.clone()
        }
    }
}

/// Validation messages keyed by field. Empty when the form is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Check the required fields. `access` is constrained by its type and never
/// reported.
pub fn validate(form: &FormState) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.country.is_empty() {
        errors.insert(FormField::Country, COUNTRY_REQUIRED);
    }
    if form.date.is_empty() {
        errors.insert(FormField::Date, DATE_REQUIRED);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            country: "CD".to_string(),
            date: "2024-01-01".to_string(),
            access: Access::AllAccess,
            continent: None,
        }
    }

    #[test]
    fn test_new_defaults_to_week_start() {
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let form = FormState::new(wednesday);
        assert_eq!(form.country, "");
        assert_eq!(form.date, "2024-03-11");
        assert_eq!(form.access, Access::AllAccess);
        assert_eq!(form.continent, None);
    }

    #[test]
    fn test_validate_empty_form() {
        let form = FormState {
            country: String::new(),
            date: String::new(),
            ..filled()
        };
        let errors = validate(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Country), Some(COUNTRY_REQUIRED));
        assert_eq!(errors.get(FormField::Date), Some(DATE_REQUIRED));
    }

    #[test]
    fn test_validate_filled_form() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn test_validate_only_country_missing() {
        let errors = validate(&filled().with_country(""));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FormField::Country));
        assert_eq!(errors.get(FormField::Date), None);
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let form = filled();
        let next = form.with_field(FormField::Date, "2024-02-05").unwrap();
        assert_eq!(next.date, "2024-02-05");
        assert_eq!(next.country, form.country);
        assert_eq!(next.access, form.access);

        let next = form.with_field(FormField::Access, "mobile-web").unwrap();
        assert_eq!(next.access, Access::MobileWeb);
        assert_eq!(next.date, form.date);
    }

    #[test]
    fn test_with_field_is_idempotent() {
        let form = filled();
        let once = form.with_field(FormField::Access, "desktop").unwrap();
        let twice = once.with_field(FormField::Access, "desktop").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_with_field_rejects_bad_input() {
        let form = filled();
        assert_eq!(
            form.with_field(FormField::Access, "tablet"),
            Err(FormError::InvalidAccess("tablet".to_string()))
        );
    }

    #[test]
    fn test_with_field_rejects_impossible_date() {
        let form = filled();
        assert_eq!(
            form.with_field(FormField::Date, "2024-02-30"),
            Err(FormError::InvalidDate("2024-02-30".to_string()))
        );
        assert_eq!(
            form.with_field(FormField::Date, "5 March"),
            Err(FormError::InvalidDate("5 March".to_string()))
        );
        assert_eq!(form.date, "2024-01-01");
    }

    #[test]
    fn test_with_field_accepts_cleared_date() {
        let next = filled().with_field(FormField::Date, "").unwrap();
        assert_eq!(next.date, "");
        assert_eq!(validate(&next).get(FormField::Date), Some(DATE_REQUIRED));
    }

    #[test]
    fn test_with_country_and_continent() {
        let next = filled().with_country_and_continent("SN", "Africa");
        assert_eq!(next.country, "SN");
        assert_eq!(next.continent.as_deref(), Some("Africa"));
        assert_eq!(next.date, "2024-01-01");
    }
}
