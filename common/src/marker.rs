//! Sincronización de marcador y coordenadas
//!
//! `MarkerSync` es dueño del único marcador arrastrable del mapa y convierte
//! cada colocación, arrastre o borrado en el texto de los campos lat/lon.
//! El mapa queda detrás de [`MapWidget`] para que la máquina de estados corra
//! sin navegador.

use crate::geo::{Coordinate, CoordinateFields};
use crate::record::{ids, FormRecord};

/// Lo que el formulario necesita de una biblioteca de mapas.
pub trait MapWidget {
    /// Identificador de un marcador en el mapa.
    type Marker;

    /// Agrega un marcador arrastrable.
    fn add_marker(&mut self, at: Coordinate) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn set_view(&mut self, center: Coordinate, zoom: u8);
}

enum MarkerState<M> {
    NoMarker,
    Placed { at: Coordinate, marker: M },
}

/// Resultado de escribir en los campos lat/lon.
#[derive(Debug, Clone, PartialEq)]
pub enum ManualEntry {
    /// Ambos valores válidos; marcador colocado y campos reformateados.
    Placed(CoordinateFields),
    /// Al menos un campo sigue vacío.
    Incomplete,
    /// No numérico o fuera de rango; el marcador queda como estaba.
    Rejected,
}

pub struct MarkerSync<W: MapWidget> {
    map: W,
    state: MarkerState<W::Marker>,
    placement_zoom: u8,
}

impl<W: MapWidget> MarkerSync<W> {
    pub fn new(map: W, placement_zoom: u8) -> Self {
        Self {
            map,
            state: MarkerState::NoMarker,
            placement_zoom,
        }
    }

    /// Reemplaza el marcador actual por uno en `at` y centra el mapa ahí.
    ///
    /// Aquí terminan los clics, la geolocalización y la captura manual válida.
    pub fn place(&mut self, at: Coordinate) -> CoordinateFields {
        self.remove_current();
        let marker = self.map.add_marker(at);
        self.state = MarkerState::Placed { at, marker };
        self.map.set_view(at, self.placement_zoom);
        at.to_fields()
    }

    /// El marcador se soltó en `at`.
    ///
    /// Devuelve `None` si no hay marcador (un arrastre atrasado).
    pub fn drag_to(&mut self, at: Coordinate) -> Option<CoordinateFields> {
        match &mut self.state {
            MarkerState::Placed { at: current, .. } => {
                *current = at;
                Some(at.to_fields())
            }
            MarkerState::NoMarker => None,
        }
    }

    pub fn clear(&mut self) -> CoordinateFields {
        self.remove_current();
        CoordinateFields::blank()
    }

    /// Coloca desde el texto de los campos lat/lon, si ambos son válidos.
    pub fn manual_entry(&mut self, lat: &str, lon: &str) -> ManualEntry {
        if lat.trim().is_empty() || lon.trim().is_empty() {
            return ManualEntry::Incomplete;
        }
        match Coordinate::parse(lat, lon) {
            Some(at) => ManualEntry::Placed(self.place(at)),
            None => ManualEntry::Rejected,
        }
    }

    pub fn position(&self) -> Option<Coordinate> {
        match &self.state {
            MarkerState::Placed { at, .. } => Some(*at),
            MarkerState::NoMarker => None,
        }
    }

    pub fn has_marker(&self) -> bool {
        matches!(self.state, MarkerState::Placed { .. })
    }

    pub fn map(&self) -> &W {
        &self.map
    }

    fn remove_current(&mut self) {
        if let MarkerState::Placed { marker, .. } =
            std::mem::replace(&mut self.state, MarkerState::NoMarker)
        {
            self.map.remove_marker(marker);
        }
    }
}

/// Sincronización de marcador reflejada en un [`FormRecord`].
///
/// El mapa puede conectarse tarde; mientras tanto las colocaciones escriben
/// lat/lon, los arrastres se ignoran y borrar solo vacía los campos.
pub struct FormMapSync<W: MapWidget> {
    sync: Option<MarkerSync<W>>,
}

impl<W: MapWidget> Default for FormMapSync<W> {
    fn default() -> Self {
        Self { sync: None }
    }
}

impl<W: MapWidget> FormMapSync<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, sync: MarkerSync<W>) {
        self.sync = Some(sync);
    }

    pub fn is_attached(&self) -> bool {
        self.sync.is_some()
    }

    pub fn marker_sync(&self) -> Option<&MarkerSync<W>> {
        self.sync.as_ref()
    }

    pub fn place(&mut self, record: &mut FormRecord, at: Coordinate) {
        let fields = match self.sync.as_mut() {
            Some(sync) => sync.place(at),
            None => at.to_fields(),
        };
        record.set_coordinates(&fields);
    }

    pub fn drag_to(&mut self, record: &mut FormRecord, at: Coordinate) {
        if let Some(fields) = self.sync.as_mut().and_then(|s| s.drag_to(at)) {
            record.set_coordinates(&fields);
        }
    }

    /// Quita el marcador y vacía ambos campos de coordenadas.
    pub fn clear(&mut self, record: &mut FormRecord) {
        if let Some(sync) = self.sync.as_mut() {
            sync.clear();
        }
        record.set_coordinates(&CoordinateFields::blank());
    }

    /// Cambió el campo lat o lon de `record`.
    ///
    /// Un par válido reformatea ambos campos; cualquier otra cosa deja el
    /// registro como se escribió.
    pub fn manual_entry(&mut self, record: &mut FormRecord) -> ManualEntry {
        let Some(sync) = self.sync.as_mut() else {
            return ManualEntry::Incomplete;
        };
        let outcome = sync.manual_entry(record.get(ids::LAT), record.get(ids::LON));
        if let ManualEntry::Placed(fields) = &outcome {
            record.set_coordinates(fields);
        }
        outcome
    }
}
