//! Turning a validated form into the payload handed to the caller.

use crate::access::Access;
use crate::form::{validate, FormErrors, FormState};
use serde::{Deserialize, Serialize};
use wpv_utils::dates;

/// Base of the Wikimedia pageviews "top articles per country" endpoint.
pub const TOP_PER_COUNTRY_BASE: &str =
    "https://wikimedia.org/api/rest_v1/metrics/pageviews/top-per-country";

/// Form fields plus the date split into its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub country: String,
    pub date: String,
    pub access: Access,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl SubmitPayload {
    /// Build the payload from the form as-is; country and access are not
    /// normalized.
    pub fn from_form(form: &FormState) -> Self {
        let (year, month, day) = dates::split_date(&form.date);
        Self {
            country: form.country.clone(),
            date: form.date.clone(),
            access: form.access,
            continent: form.continent.clone(),
            year,
            month,
            day,
        }
    }

    /// URL of the top-articles query this payload describes.
    pub fn top_articles_url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            TOP_PER_COUNTRY_BASE, self.country, self.access, self.year, self.month, self.day
        )
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid(SubmitPayload),
    Invalid(FormErrors),
}

/// Validate the form and, if it passes, normalize it into a payload.
pub fn prepare_submission(form: &FormState) -> SubmitOutcome {
    let errors = validate(form);
    if errors.is_empty() {
        SubmitOutcome::Valid(SubmitPayload::from_form(form))
    } else {
        SubmitOutcome::Invalid(errors)
    }
}
