//! Servidor de folios vía `fetch`
//!
//! Envía el registro como JSON por POST y lee `{success, folio, qrImageUrl}`.
//! Con `simulate` activo, responde localmente tras un breve retardo.

use async_trait::async_trait;
use catastro_common::backend::SIMULATED_DELAY;
use catastro_common::{
    simulated_response, Backend, BackendConfig, Error, FormRecord, Result, ServerResponse,
};
use futures::future::{self, Either};
use futures::FutureExt;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::{GetUntracked, ReadSignal};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Lee los ajustes vigentes en cada envío.
pub struct FetchBackend {
    config: ReadSignal<BackendConfig>,
}

impl FetchBackend {
    pub fn new(config: ReadSignal<BackendConfig>) -> Self {
        Self { config }
    }
}

fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

fn js_error(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

async fn post_json(endpoint: &str, record: &FormRecord) -> Result<ServerResponse> {
    let body = serde_json::to_string(record)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let status = resp.status();
        // Un 5xx puede resolverse al reintentar; lo demás es un rechazo del servidor.
        return Err(if status >= 500 {
            Error::Transport(format!("HTTP {}", status))
        } else {
            Error::Rejected(format!("HTTP {}", status))
        });
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Transport(format!("Invalid response: {}", e)))
}

async fn simulate(record: &FormRecord) -> Result<ServerResponse> {
    TimeoutFuture::new(millis(SIMULATED_DELAY)).await;
    let sequence = (js_sys::Math::random() * 10_000.0) as u32;
    let year = js_sys::Date::new_0().get_full_year() as i32;
    Ok(simulated_response(record, sequence, year))
}

#[async_trait(?Send)]
impl Backend for FetchBackend {
    async fn send(&self, record: &FormRecord, timeout: Duration) -> Result<ServerResponse> {
        let config = self.config.get_untracked();
        let request = if config.simulate {
            simulate(record).boxed_local()
        } else {
            post_json(&config.endpoint, record).boxed_local()
        };
        let timer = Box::pin(TimeoutFuture::new(millis(timeout)));

        let outcome = future::select(request, timer).await;
        match outcome {
            Either::Left((response, _)) => response,
            Either::Right(_) => Err(Error::Timeout(timeout)),
        }
    }

    async fn pause(&self, delay: Duration) {
        TimeoutFuture::new(millis(delay)).await;
    }
}
