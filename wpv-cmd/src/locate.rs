//! Running the location resolver against the real lookup service.

use anyhow::bail;
use log::info;
use wpv_form::location::{resolve_location, Coordinates, FixedGeolocation, Lifetime};
use wpv_form::lookup::HttpCountryLookup;
use wpv_form::notify::LogNotifier;
use wpv_form::{ArticleFormModel, LocationOutcome};

/// Resolve the country at (`lat`, `lon`) and print the resulting form state.
pub async fn run_locate(lat: f64, lon: f64, endpoint: Option<&str>) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        bail!("Coordinates out of range: ({}, {})", lat, lon);
    }

    let lookup = match endpoint {
        Some(endpoint) => HttpCountryLookup::with_endpoint(endpoint),
        None => HttpCountryLookup::new(),
    };
    let geolocation = FixedGeolocation(Coordinates {
        latitude: lat,
        longitude: lon,
    });
    info!("Resolving country via {}", lookup.endpoint());

    let mut model = ArticleFormModel::for_current_week();
    let outcome = resolve_location(
        &geolocation,
        &lookup,
        &LogNotifier,
        &Lifetime::new(),
        |code| model.apply_located_country(&code),
    )
    .await;

    match outcome {
        LocationOutcome::Resolved(code) => {
            println!("{}", code);
            info!(
                "Form now: country={} continent={} date={}",
                model.form.country, model.selection.continent, model.form.date
            );
            Ok(())
        }
        other => bail!("Location lookup did not resolve: {:?}", other),
    }
}
