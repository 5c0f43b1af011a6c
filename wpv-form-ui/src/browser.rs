//! Thin wrappers over the browser APIs the form needs.
//!
//! `navigator.geolocation` is callback based; `BrowserGeolocation` bridges
//! it into a future with a oneshot channel so the resolver can `.await` it.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};
use wpv_form::location::{Coordinates, GeolocationProvider, LocationError};

type PositionSender = Rc<RefCell<Option<oneshot::Sender<Result<Coordinates, LocationError>>>>>;

/// `navigator.geolocation`, single-shot.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserGeolocation;

#[async_trait(?Send)]
impl GeolocationProvider for BrowserGeolocation {
    fn is_supported(&self) -> bool {
        match web_sys::window() {
            Some(window) => js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("geolocation"))
                .unwrap_or(false),
            None => false,
        }
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let geolocation = web_sys::window()
            .ok_or(LocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        let (tx, rx) = oneshot::channel();
        let tx: PositionSender = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let tx = tx.clone();
            Closure::once(move |position: GeolocationPosition| {
                let coords = position.coords();
                send_once(
                    &tx,
                    Ok(Coordinates {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    }),
                );
            })
        };
        let on_error = {
            let tx = tx.clone();
            Closure::once(move |error: GeolocationPositionError| {
                send_once(&tx, Err(position_error(&error)));
            })
        };

        geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .map_err(|e| LocationError::Unavailable(format!("{:?}", e)))?;

        // Both callbacks must outlive the request; only one of them ever runs
        let result = rx.await.unwrap_or_else(|_| {
            Err(LocationError::Unavailable(
                "position callback dropped".to_string(),
            ))
        });
        drop(on_success);
        drop(on_error);
        result
    }
}

fn send_once(tx: &PositionSender, result: Result<Coordinates, LocationError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn position_error(error: &GeolocationPositionError) -> LocationError {
    // PERMISSION_DENIED = 1, POSITION_UNAVAILABLE = 2, TIMEOUT = 3
    match error.code() {
        1 => LocationError::PermissionDenied,
        3 => LocationError::Timeout,
        _ => LocationError::Unavailable(error.message()),
    }
}

/// Resolve after `ms` milliseconds using `setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let delay = i32::try_from(ms).unwrap_or(i32::MAX);
            if let Err(e) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay)
            {
                log::warn!("setTimeout failed: {:?}", e);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Non-empty value of a query string parameter of the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|value| !value.is_empty())
}
