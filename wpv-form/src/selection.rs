use crate::regions::{self, DEFAULT_CONTINENT, DEFAULT_COUNTRY};
use serde::{Deserialize, Serialize};

/// Country and continent currently shown by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSelection {
    pub country: String,
    pub continent: String,
}

impl Default for PickerSelection {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            continent: DEFAULT_CONTINENT.to_string(),
        }
    }
}

impl PickerSelection {
    /// Overwrite with values supplied by the host page. Each side is applied
    /// on its own; absent or empty values leave the current one.
    pub fn apply_external(&mut self, country: Option<&str>, continent: Option<&str>) {
        if let Some(country) = country.filter(|c| !c.is_empty()) {
            self.country = country.to_string();
        }
        if let Some(continent) = continent.filter(|c| !c.is_empty()) {
            self.continent = continent.to_string();
        }
    }

    /// Show `code`, switching continent when the table knows where it lives.
    pub fn show_country(&mut self, code: &str) {
        self.country = code.to_string();
        if let Some(continent) = regions::continent_of(code) {
            self.continent = continent.to_string();
        }
    }
}
