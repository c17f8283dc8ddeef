//! Coordenadas y su representación en el formulario

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

/// Latitud/longitud en grados, siempre dentro de rango.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let in_range = |v: f64, (min, max): (f64, f64)| v.is_finite() && v >= min && v <= max;
        if in_range(lat, LAT_RANGE) && in_range(lon, LON_RANGE) {
            Ok(Self { lat, lon })
        } else {
            Err(Error::InvalidCoordinate { lat, lon })
        }
    }

    /// Para literales que ya se sabe que están en rango.
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Interpreta los dos campos del formulario. `None` salvo que ambos sean números en rango.
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        Self::new(lat, lon).ok()
    }

    pub fn to_fields(&self) -> CoordinateFields {
        CoordinateFields {
            lat: format_degrees(self.lat),
            lon: format_degrees(self.lon),
        }
    }
}

/// Aviso bajo los campos de coordenadas mientras su texto no sirve.
pub const COORDINATE_HINT: &str =
    "Coordenadas no válidas: latitud entre -90 y 90, longitud entre -180 y 180.";

/// Ambos campos llenos, pero sin formar una coordenada válida.
pub fn is_rejected_entry(lat: &str, lon: &str) -> bool {
    !lat.trim().is_empty() && !lon.trim().is_empty() && Coordinate::parse(lat, lon).is_none()
}

/// Seis decimales, tal como se escriben en los campos lat/lon.
///
/// El cero negativo se escribe como `0.000000`.
pub fn format_degrees(value: f64) -> String {
    format!("{:.6}", value + 0.0)
}

/// Texto de los campos lat/lon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateFields {
    pub lat: String,
    pub lon: String,
}

impl CoordinateFields {
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Fallo reportado por la API de geolocalización del dispositivo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeolocationError {
    pub code: u16,
    pub message: String,
}

impl GeolocationError {
    /// Texto de la alerta: el mensaje del navegador, o el código si viene vacío.
    pub fn alert_message(&self) -> String {
        let detail = if self.message.is_empty() {
            self.code.to_string()
        } else {
            self.message.clone()
        };
        format!("No se pudo obtener la ubicación: {}", detail)
    }
}

pub const GEOLOCATION_UNAVAILABLE: &str = "Geolocalización no disponible.";
