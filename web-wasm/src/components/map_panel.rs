//! Componente del panel de mapa
//!
//! Mapa Leaflet con los botones de ubicación. Hacer clic en el mapa, usar la
//! ubicación del dispositivo o arrastrar el marcador escribe lat/lon en el registro.

use crate::geolocation;
use crate::map::{self, SharedMarkerSync};
use crate::notify;
use catastro_common::geo::{is_rejected_entry, COORDINATE_HINT, GEOLOCATION_UNAVAILABLE};
use catastro_common::record::ids;
use catastro_common::{FormRecord, MapConfig};
use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn MapPanel(
    record: RwSignal<FormRecord>,
    marker_sync: SharedMarkerSync,
    map_config: MapConfig,
) -> impl IntoView {
    let map_ref = NodeRef::<Div>::new();

    // Montar cuando el contenedor ya está en el documento.
    Effect::new(move |_| {
        let Some(container) = map_ref.get() else {
            return;
        };
        if map::is_mounted(marker_sync) {
            return;
        }
        if let Err(e) = map::mount(marker_sync, record, &container, &map_config) {
            notify::log_error("Mapa", &e);
        }
    });

    let on_use_location = move |_| {
        let started = geolocation::current_position(
            move |at| map::place(marker_sync, record, at),
            |err| notify::alert(&err.alert_message()),
        );
        if !started {
            notify::alert(GEOLOCATION_UNAVAILABLE);
        }
    };

    let on_clear = move |_| map::clear(marker_sync, record);

    let coordinate_hint = Memo::new(move |_| {
        record.with(|r| is_rejected_entry(r.get(ids::LAT), r.get(ids::LON)))
    });

    view! {
        <div class="map-panel">
            <div id="map" class="map" node_ref=map_ref></div>
            <div class="map-actions">
                <button type="button" id="useLocation" class="btn btn-secondary" on:click=on_use_location>
                    "Usar mi ubicación"
                </button>
                <button type="button" id="clearMarker" class="btn btn-tertiary" on:click=on_clear>
                    "Quitar marcador"
                </button>
            </div>
            <Show when=move || coordinate_hint.get()>
                <p class="text-muted coordinate-hint">{COORDINATE_HINT}</p>
            </Show>
        </div>
    }
}
