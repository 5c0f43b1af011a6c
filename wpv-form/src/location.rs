//! Resolving the user's country from their position.
//!
//! The browser capability and the reverse-geocoding call are injected
//! through [`GeolocationProvider`] and [`CountryLookup`] so the resolver can
//! run against fakes. A [`Lifetime`] token ties the resolution to the
//! component that started it: once the component is gone, the located
//! country is dropped instead of being applied.

use crate::notify::{Notifier, ToastOptions};
use async_trait::async_trait;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by this browser.";
pub const GEOLOCATION_FAILED: &str = "Error getting geolocation.";
pub const LOOKUP_FAILED: &str = "Error fetching location data.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    Unsupported,
    PermissionDenied,
    Unavailable(String),
    Timeout,
    Lookup(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unsupported => write!(f, "geolocation is not supported"),
            LocationError::PermissionDenied => write!(f, "geolocation permission denied"),
            LocationError::Unavailable(reason) => write!(f, "position unavailable: {reason}"),
            LocationError::Timeout => write!(f, "geolocation request timed out"),
            LocationError::Lookup(reason) => write!(f, "country lookup failed: {reason}"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Source of the device position.
#[async_trait(?Send)]
pub trait GeolocationProvider {
    fn is_supported(&self) -> bool;

    /// Single-shot position request.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Maps a position to an ISO 3166-1 alpha-2 country code.
#[async_trait(?Send)]
pub trait CountryLookup {
    async fn country_code(&self, latitude: f64, longitude: f64) -> Result<String, LocationError>;
}

/// Liveness flag shared between a component and the tasks it started.
#[derive(Debug, Clone)]
pub struct Lifetime(Rc<Cell<bool>>);

impl Lifetime {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn end(&self) {
        self.0.set(false);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Resolved(String),
    Unsupported,
    PositionFailed(LocationError),
    LookupFailed(LocationError),
    /// The country was found after the owner went away and was discarded.
    Cancelled,
}

/// Locate the user and hand the country code to `apply`.
///
/// Every failure is reported once through `notifier` and leaves state
/// untouched. `apply` only runs while `lifetime` is alive.
pub async fn resolve_location<G, L, N, F>(
    geolocation: &G,
    lookup: &L,
    notifier: &N,
    lifetime: &Lifetime,
    apply: F,
) -> LocationOutcome
where
    G: GeolocationProvider + ?Sized,
    L: CountryLookup + ?Sized,
    N: Notifier + ?Sized,
    F: FnOnce(String),
{
    let options = ToastOptions::geolocation_failure();

    if !geolocation.is_supported() {
        log::warn!("Geolocation capability missing");
        notifier.error(GEOLOCATION_UNSUPPORTED, &options);
        return LocationOutcome::Unsupported;
    }

    let coords = match geolocation.current_position().await {
        Ok(coords) => coords,
        Err(e) => {
            log::warn!("Failed to get current position: {}", e);
            notifier.error(GEOLOCATION_FAILED, &options);
            return LocationOutcome::PositionFailed(e);
        }
    };

    let code = match lookup.country_code(coords.latitude, coords.longitude).await {
        Ok(code) => code,
        Err(e) => {
            log::error!(
                "Country lookup for ({:.4}, {:.4}) failed: {}",
                coords.latitude,
                coords.longitude,
                e
            );
            notifier.error(LOOKUP_FAILED, &options);
            return LocationOutcome::LookupFailed(e);
        }
    };

    if !lifetime.is_alive() {
        log::debug!("Discarding located country {} after unmount", code);
        return LocationOutcome::Cancelled;
    }

    log::info!("Located country {}", code);
    apply(code.clone());
    LocationOutcome::Resolved(code)
}

/// Provider that always returns the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocation(pub Coordinates);

#[async_trait(?Send)]
impl GeolocationProvider for FixedGeolocation {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    pub struct FakeGeolocation {
        pub supported: bool,
        pub position: Result<Coordinates, LocationError>,
        pub requests: Cell<usize>,
    }

    impl FakeGeolocation {
        pub fn at(latitude: f64, longitude: f64) -> Self {
            Self {
                supported: true,
                position: Ok(Coordinates {
                    latitude,
                    longitude,
                }),
                requests: Cell::new(0),
            }
        }

        pub fn failing(error: LocationError) -> Self {
            Self {
                supported: true,
                position: Err(error),
                requests: Cell::new(0),
            }
        }

        pub fn unsupported() -> Self {
            Self {
                supported: false,
                position: Err(LocationError::Unsupported),
                requests: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl GeolocationProvider for FakeGeolocation {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            self.requests.set(self.requests.get() + 1);
            self.position.clone()
        }
    }

    pub struct FakeLookup {
        pub result: Result<String, LocationError>,
        pub seen: RefCell<Vec<(f64, f64)>>,
        /// Ends this lifetime while the lookup is in flight.
        pub end_during_lookup: Option<Lifetime>,
    }

    impl FakeLookup {
        pub fn returning(code: &str) -> Self {
            Self {
                result: Ok(code.to_string()),
                seen: RefCell::new(Vec::new()),
                end_during_lookup: None,
            }
        }

        pub fn failing() -> Self {
            Self {
                result: Err(LocationError::Lookup("HTTP 503".to_string())),
                seen: RefCell::new(Vec::new()),
                end_during_lookup: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl CountryLookup for FakeLookup {
        async fn country_code(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<String, LocationError> {
            self.seen.borrow_mut().push((latitude, longitude));
            if let Some(lifetime) = &self.end_during_lookup {
                lifetime.end();
            }
            self.result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeGeolocation, FakeLookup};
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::notify::Severity;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_resolves_and_applies_country() {
        let geolocation = FakeGeolocation::at(48.85, 2.35);
        let lookup = FakeLookup::returning("FR");
        let notifier = RecordingNotifier::default();
        let applied = RefCell::new(None);

        let outcome = resolve_location(&geolocation, &lookup, &notifier, &Lifetime::new(), |c| {
            *applied.borrow_mut() = Some(c)
        })
        .await;

        assert_eq!(outcome, LocationOutcome::Resolved("FR".to_string()));
        assert_eq!(applied.into_inner().as_deref(), Some("FR"));
        assert_eq!(notifier.count(), 0);
        assert_eq!(*lookup.seen.borrow(), vec![(48.85, 2.35)]);
        assert_eq!(geolocation.requests.get(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_reports_once_and_stops() {
        let geolocation = FakeGeolocation::unsupported();
        let lookup = FakeLookup::returning("FR");
        let notifier = RecordingNotifier::default();

        let outcome =
            resolve_location(&geolocation, &lookup, &notifier, &Lifetime::new(), |_| {
                panic!("must not apply")
            })
            .await;

        assert_eq!(outcome, LocationOutcome::Unsupported);
        assert_eq!(notifier.messages(), vec![GEOLOCATION_UNSUPPORTED]);
        assert_eq!(geolocation.requests.get(), 0);
        assert!(lookup.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_denied_permission_reports_once() {
        let geolocation = FakeGeolocation::failing(LocationError::PermissionDenied);
        let lookup = FakeLookup::returning("FR");
        let notifier = RecordingNotifier::default();

        let outcome =
            resolve_location(&geolocation, &lookup, &notifier, &Lifetime::new(), |_| {
                panic!("must not apply")
            })
            .await;

        assert_eq!(
            outcome,
            LocationOutcome::PositionFailed(LocationError::PermissionDenied)
        );
        assert_eq!(notifier.messages(), vec![GEOLOCATION_FAILED]);
        let calls = notifier.calls.borrow();
        assert_eq!(calls[0].0, Severity::Error);
        assert_eq!(calls[0].2, ToastOptions::geolocation_failure());
        assert!(lookup.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_reports_once() {
        let geolocation = FakeGeolocation::at(-4.32, 15.31);
        let lookup = FakeLookup::failing();
        let notifier = RecordingNotifier::default();

        let outcome =
            resolve_location(&geolocation, &lookup, &notifier, &Lifetime::new(), |_| {
                panic!("must not apply")
            })
            .await;

        assert!(matches!(outcome, LocationOutcome::LookupFailed(_)));
        assert_eq!(notifier.messages(), vec![LOOKUP_FAILED]);
    }

    #[tokio::test]
    async fn test_unmount_during_lookup_drops_result() {
        let lifetime = Lifetime::new();
        let geolocation = FakeGeolocation::at(48.85, 2.35);
        let mut lookup = FakeLookup::returning("FR");
        lookup.end_during_lookup = Some(lifetime.clone());
        let notifier = RecordingNotifier::default();

        let outcome = resolve_location(&geolocation, &lookup, &notifier, &lifetime, |_| {
            panic!("must not apply after unmount")
        })
        .await;

        assert_eq!(outcome, LocationOutcome::Cancelled);
        assert!(!lifetime.is_alive());
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn test_lifetime_shared_between_clones() {
        let lifetime = Lifetime::new();
        let task_copy = lifetime.clone();
        assert!(task_copy.is_alive());
        lifetime.end();
        assert!(!task_copy.is_alive());
    }

    #[tokio::test]
    async fn test_fixed_geolocation() {
        let coords = Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        };
        let provider = FixedGeolocation(coords);
        assert!(provider.is_supported());
        assert_eq!(provider.current_position().await, Ok(coords));
    }
}
