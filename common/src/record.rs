//! Registro del formulario de orden de trabajo
//!
//! `FormRecord` es el único punto de lectura/escritura entre el formulario y
//! el resto del código: id de campo → valor actual, en el orden del formulario.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Ids de campo que el resto del código lee o escribe directamente.
pub mod ids {
    pub const FOLIO: &str = "folio";
    pub const FECHA: &str = "fecha";
    pub const NOMBRE: &str = "nombre";
    pub const CLAVE: &str = "clave";
    pub const LAT: &str = "lat";
    pub const LON: &str = "lon";
}

/// Mapa ordenado id de campo → valor.
///
/// Los ids son únicos. Un id repetido conserva la posición de su primera
/// aparición y toma el último valor.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    entries: IndexMap<String, String>,
}

/// El orden de los campos forma parte de la identidad del registro.
impl PartialEq for FormRecord {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for FormRecord {}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye un registro a partir de pares `(id, valor)` en orden del formulario.
    ///
    /// Los pares con id vacío son campos sin etiqueta y se omiten.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (id, value) in fields {
            let id = id.into();
            if id.is_empty() {
                continue;
            }
            record.set(id, value);
        }
        record
    }

    /// Valor actual de `id`; los campos ausentes se leen como `""`.
    pub fn get(&self, id: &str) -> &str {
        self.entries.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Asigna `value` a `id`, agregando el campo si es nuevo.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(id.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Escribe el par latitud/longitud producido por el mapa.
    pub fn set_coordinates(&mut self, fields: &crate::geo::CoordinateFields) {
        self.set(ids::LAT, fields.lat.clone());
        self.set(ids::LON, fields.lon.clone());
    }
}

impl<'de> Deserialize<'de> for FormRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, String>::deserialize(deserializer)?;
        Ok(Self::from_fields(entries))
    }
}
