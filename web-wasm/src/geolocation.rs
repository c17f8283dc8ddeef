//! Geolocalización del dispositivo

use catastro_common::{Coordinate, GeolocationError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Position as GeolocationPosition, PositionError as GeolocationPositionError};

/// Pide al navegador la posición actual.
///
/// Se ejecuta exactamente un callback. Devuelve `false` si la página no
/// tiene API de geolocalización.
pub fn current_position<S, E>(on_success: S, on_error: E) -> bool
where
    S: FnOnce(Coordinate) + 'static,
    E: FnOnce(GeolocationError) + 'static,
{
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        return false;
    };

    let on_error = Rc::new(RefCell::new(Some(on_error)));
    let on_error_fix = on_error.clone();

    let success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        match Coordinate::new(coords.latitude(), coords.longitude()) {
            Ok(at) => on_success(at),
            Err(e) => {
                if let Some(on_error) = on_error_fix.borrow_mut().take() {
                    on_error(GeolocationError { code: 0, message: e.to_string() });
                }
            }
        }
    });
    let failure = Closure::once_into_js(move |error: GeolocationPositionError| {
        if let Some(on_error) = on_error.borrow_mut().take() {
            on_error(GeolocationError {
                code: error.code(),
                message: error.message(),
            });
        }
    });

    geolocation
        .get_current_position_with_error_callback(
            success.unchecked_ref(),
            Some(failure.unchecked_ref()),
        )
        .is_ok()
}
