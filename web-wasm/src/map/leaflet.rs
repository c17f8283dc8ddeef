//! Enlaces a Leaflet
//!
//! El lado JS guarda los objetos de Leaflet; Rust solo tiene identificadores numéricos.

use catastro_common::{Coordinate, MapConfig, MapWidget};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen(module = "/js/leaflet-bridge.js")]
extern "C" {
    /// Crea un mapa dentro de `container` con la capa de teselas OSM.
    ///
    /// # Argumentos
    /// * `on_click` - `(lat, lon)` de cada clic en el mapa
    /// * `on_marker_drag` - `(lat, lon)` donde se soltó un marcador de este mapa
    ///
    /// # Retorno
    /// Identificador del mapa
    #[wasm_bindgen(js_name = "createMap", catch)]
    fn create_map_js(
        container: &HtmlElement,
        lat: f64,
        lon: f64,
        zoom: u8,
        tile_url: &str,
        attribution: &str,
        on_click: &js_sys::Function,
        on_marker_drag: &js_sys::Function,
    ) -> Result<u32, JsValue>;

    #[wasm_bindgen(js_name = "addMarker")]
    fn add_marker_js(map_id: u32, lat: f64, lon: f64) -> u32;

    #[wasm_bindgen(js_name = "removeMarker")]
    fn remove_marker_js(map_id: u32, marker_id: u32);

    #[wasm_bindgen(js_name = "setView")]
    fn set_view_js(map_id: u32, lat: f64, lon: f64, zoom: u8);
}

/// Marcador dentro de un [`LeafletMap`].
#[derive(Debug, PartialEq, Eq)]
pub struct MarkerHandle(u32);

pub struct LeafletMap {
    id: u32,
}

impl LeafletMap {
    /// Monta un mapa en `container`.
    ///
    /// Los callbacks viven lo mismo que la página.
    pub fn mount<C, D>(
        container: &HtmlElement,
        config: &MapConfig,
        on_click: C,
        on_marker_drag: D,
    ) -> Result<Self, String>
    where
        C: FnMut(f64, f64) + 'static,
        D: FnMut(f64, f64) + 'static,
    {
        let on_click = Closure::wrap(Box::new(on_click) as Box<dyn FnMut(f64, f64)>);
        let on_marker_drag = Closure::wrap(Box::new(on_marker_drag) as Box<dyn FnMut(f64, f64)>);

        let id = create_map_js(
            container,
            config.center.lat(),
            config.center.lon(),
            config.zoom,
            &config.tile_url,
            &config.attribution,
            on_click.as_ref().unchecked_ref(),
            on_marker_drag.as_ref().unchecked_ref(),
        )
        .map_err(|e| format!("Map initialisation failed: {:?}", e))?;

        on_click.forget();
        on_marker_drag.forget();
        Ok(Self { id })
    }
}

impl MapWidget for LeafletMap {
    type Marker = MarkerHandle;

    fn add_marker(&mut self, at: Coordinate) -> MarkerHandle {
        MarkerHandle(add_marker_js(self.id, at.lat(), at.lon()))
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        remove_marker_js(self.id, marker.0);
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        set_view_js(self.id, center.lat(), center.lon(), zoom);
    }
}
