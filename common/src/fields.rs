//! Catálogo de campos de la orden de trabajo
//!
//! Diseño por defecto del formulario de captura. La página los muestra en
//! orden y la CLI los pregunta en el mismo orden, así un registro capturado
//! siempre lista sus campos igual.

use crate::record::{ids, FormRecord};

/// Tipo de control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select(&'static [&'static str]),
    TextArea,
}

/// Un campo etiquetado del formulario
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Lo llena el sistema (folio, fecha), no el capturista.
    pub read_only: bool,
}

impl FieldSpec {
    const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { id, label, kind, required: false, read_only: false }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

pub const TRAMITES: &[&str] = &[
    "Levantamiento topográfico",
    "Deslinde",
    "Actualización catastral",
    "Subdivisión",
    "Fusión de predios",
];

pub const WORK_ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(ids::FOLIO, "Folio", FieldKind::Text).read_only(),
    FieldSpec::new(ids::FECHA, "Fecha", FieldKind::Text).read_only(),
    FieldSpec::new(ids::NOMBRE, "Nombre del propietario", FieldKind::Text).required(),
    FieldSpec::new(ids::CLAVE, "Clave catastral", FieldKind::Text).required(),
    FieldSpec::new("tipo_tramite", "Tipo de trámite", FieldKind::Select(TRAMITES)),
    FieldSpec::new("direccion", "Dirección", FieldKind::Text),
    FieldSpec::new("colonia", "Colonia", FieldKind::Text),
    FieldSpec::new("municipio", "Municipio", FieldKind::Text),
    FieldSpec::new("superficie", "Superficie (m²)", FieldKind::Number),
    FieldSpec::new(ids::LAT, "Latitud", FieldKind::Number).required(),
    FieldSpec::new(ids::LON, "Longitud", FieldKind::Number).required(),
    FieldSpec::new("observaciones", "Observaciones", FieldKind::TextArea),
];

pub fn find(id: &str) -> Option<&'static FieldSpec> {
    WORK_ORDER_FIELDS.iter().find(|f| f.id == id)
}

/// Registro vacío con todos los campos del catálogo.
///
/// Los `select` inician en su primera opción, como en el navegador.
pub fn blank_record() -> FormRecord {
    FormRecord::from_fields(WORK_ORDER_FIELDS.iter().map(|f| {
        let initial = match f.kind {
            FieldKind::Select(options) => options.first().copied().unwrap_or(""),
            _ => "",
        };
        (f.id, initial)
    }))
}
