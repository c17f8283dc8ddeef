//! Sincronización de coordenadas del mapa en la página
//!
//! Un `FormMapSync` por página, guardado en la arena reactiva para que los
//! manejadores de eventos y los callbacks JS lo alcancen. Cada cambio del
//! marcador se refleja en los campos lat/lon del registro.

pub mod leaflet;

use catastro_common::{Coordinate, FormMapSync, FormRecord, ManualEntry, MapConfig, MarkerSync};
use leaflet::LeafletMap;
use leptos::prelude::*;
use web_sys::HtmlElement;

pub type SharedMarkerSync = StoredValue<FormMapSync<LeafletMap>, LocalStorage>;

pub fn new_shared() -> SharedMarkerSync {
    StoredValue::new_local(FormMapSync::new())
}

/// Monta Leaflet en `container` y conecta clics y arrastres con el registro.
pub fn mount(
    sync: SharedMarkerSync,
    record: RwSignal<FormRecord>,
    container: &HtmlElement,
    config: &MapConfig,
) -> Result<(), String> {
    let on_click = move |lat: f64, lon: f64| {
        if let Ok(at) = Coordinate::new(lat, lon) {
            place(sync, record, at);
        }
    };
    let on_marker_drag = move |lat: f64, lon: f64| {
        if let Ok(at) = Coordinate::new(lat, lon) {
            with_record(sync, record, |s, r| s.drag_to(r, at));
        }
    };

    let map = LeafletMap::mount(container, config, on_click, on_marker_drag)?;
    sync.update_value(|s| s.attach(MarkerSync::new(map, config.placement_zoom)));
    Ok(())
}

pub fn is_mounted(sync: SharedMarkerSync) -> bool {
    sync.with_value(|s| s.is_attached())
}

/// Ejecuta `f` sobre una copia del registro; la señal solo se escribe si cambia.
fn with_record<T>(
    sync: SharedMarkerSync,
    record: RwSignal<FormRecord>,
    f: impl FnOnce(&mut FormMapSync<LeafletMap>, &mut FormRecord) -> T,
) -> Option<T> {
    let mut draft = record.get_untracked();
    let out = sync.try_update_value(|s| f(s, &mut draft))?;
    if record.with_untracked(|r| *r != draft) {
        record.set(draft);
    }
    Some(out)
}

/// Clic en el mapa o posición de geolocalización.
pub fn place(sync: SharedMarkerSync, record: RwSignal<FormRecord>, at: Coordinate) {
    with_record(sync, record, |s, r| s.place(r, at));
}

/// Quita el marcador y vacía lat/lon.
pub fn clear(sync: SharedMarkerSync, record: RwSignal<FormRecord>) {
    with_record(sync, record, |s, r| s.clear(r));
}

/// Cambió el campo lat o lon.
pub fn manual_entry(sync: SharedMarkerSync, record: RwSignal<FormRecord>) -> ManualEntry {
    with_record(sync, record, |s, r| s.manual_entry(r)).unwrap_or(ManualEntry::Incomplete)
}
