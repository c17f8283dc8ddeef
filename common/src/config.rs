//! Ajustes de servidor y mapa compartidos por la página y la CLI

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "/api/generar-orden.php";

const DEFAULT_CENTER: Coordinate = Coordinate::new_unchecked(19.29, -98.98);

/// A dónde y cómo se envían las órdenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    /// Responder localmente con un folio generado en lugar de llamar a `endpoint`.
    pub simulate: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 15_000,
            max_attempts: 3,
            retry_delay_ms: 1_000,
            simulate: true,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Vista inicial del mapa y fuente de teselas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
    /// Zoom al colocar un marcador.
    pub placement_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: 13,
            placement_zoom: 17,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "©️ OSM".to_string(),
        }
    }
}
