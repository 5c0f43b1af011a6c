//! Reverse geocoding over HTTP.

use crate::location::LocationError;
use serde::Deserialize;

#[cfg(feature = "api")]
use crate::location::CountryLookup;
#[cfg(feature = "api")]
use async_trait::async_trait;
#[cfg(feature = "api")]
use reqwest::Client;

/// Keyless client-side reverse geocoding endpoint.
pub const DEFAULT_LOOKUP_ENDPOINT: &str =
    "https://api.bigdatacloud.net/data/reverse-geocode-client";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseGeocodeResponse {
    #[serde(default)]
    country_code: Option<String>,
}

/// Extract the country code from a reverse geocoding response body.
pub fn parse_country_code(body: &str) -> Result<String, LocationError> {
    let response: ReverseGeocodeResponse =
        serde_json::from_str(body).map_err(|e| LocationError::Lookup(e.to_string()))?;
    match response.country_code {
        Some(code) if !code.trim().is_empty() => Ok(code.trim().to_uppercase()),
        _ => Err(LocationError::Lookup(
            "response carries no country code".to_string(),
        )),
    }
}

/// [`CountryLookup`] backed by a reverse geocoding web service.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpCountryLookup {
    client: Client,
    endpoint: String,
}

#[cfg(feature = "api")]
impl HttpCountryLookup {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_LOOKUP_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "api")]
impl Default for HttpCountryLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "api")]
#[async_trait(?Send)]
impl CountryLookup for HttpCountryLookup {
    async fn country_code(&self, latitude: f64, longitude: f64) -> Result<String, LocationError> {
        let lookup_error = |e: reqwest::Error| LocationError::Lookup(e.to_string());
        log::debug!(
            "Reverse geocoding ({:.4}, {:.4}) via {}",
            latitude,
            longitude,
            self.endpoint
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "fr".to_string()),
            ])
            .send()
            .await
            .map_err(lookup_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Lookup(format!("HTTP {}", status)));
        }
        let body = response.text().await.map_err(lookup_error)?;
        parse_country_code(&body)
    }
}
