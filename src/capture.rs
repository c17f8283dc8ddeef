//! Captura interactiva de órdenes de trabajo
//!
//! Versión de terminal del formulario: una pregunta por campo del catálogo,
//! en su orden, para que el registro coincida con el de la página.

use crate::error::Result;
use catastro_common::date::format_fecha;
use catastro_common::fields::{self, FieldKind, FieldSpec, WORK_ORDER_FIELDS};
use catastro_common::record::ids;
use catastro_common::{blank_record, Coordinate, CoordinateFields, FormRecord};
use chrono::Datelike;
use dialoguer::{Input, Select};

/// Fecha de hoy como la muestra el campo `fecha`.
pub fn today_fecha() -> String {
    let today = chrono::Local::now().date_naive();
    format_fecha(today.year(), today.month(), today.day())
}

/// Valida y formatea un par latitud/longitud escrito.
pub fn coordinate_fields(lat: &str, lon: &str) -> Option<CoordinateFields> {
    Coordinate::parse(lat, lon).map(|c| c.to_fields())
}

/// Registro vacío con los campos del sistema ya llenos.
pub fn new_record() -> FormRecord {
    let mut record = blank_record();
    record.set(ids::FECHA, today_fecha());
    record
}

fn prompt_label(field: &FieldSpec) -> String {
    if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    }
}

fn ask_text(field: &FieldSpec) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt_label(field))
        .allow_empty(!field.required)
        .interact_text()?;
    Ok(value)
}

fn ask_select(field: &FieldSpec, options: &[&str]) -> Result<String> {
    let index = Select::new()
        .with_prompt(prompt_label(field))
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[index].to_string())
}

fn coordinate_prompt(id: &str) -> String {
    fields::find(id).map(prompt_label).unwrap_or_else(|| id.to_string())
}

fn ask_coordinates() -> Result<CoordinateFields> {
    let (lat_prompt, lon_prompt) = (coordinate_prompt(ids::LAT), coordinate_prompt(ids::LON));
    loop {
        let lat: String = Input::new().with_prompt(&lat_prompt).interact_text()?;
        let lon: String = Input::new().with_prompt(&lon_prompt).interact_text()?;
        match coordinate_fields(&lat, &lon) {
            Some(fields) => return Ok(fields),
            None => println!("  Latitud entre -90 y 90, longitud entre -180 y 180. Intenta de nuevo."),
        }
    }
}

/// Pregunta cada campo y devuelve el registro lleno.
pub fn run_interactive_capture() -> Result<FormRecord> {
    let mut record = new_record();
    println!("📝 Fecha: {}", record.get(ids::FECHA));
    println!("(* campo requerido)\n");

    for field in WORK_ORDER_FIELDS {
        if field.read_only || field.id == ids::LON {
            continue;
        }
        if field.id == ids::LAT {
            record.set_coordinates(&ask_coordinates()?);
            continue;
        }

        let value = match field.kind {
            FieldKind::Select(options) => ask_select(field, options)?,
            FieldKind::Text | FieldKind::Number | FieldKind::TextArea => ask_text(field)?,
        };
        record.set(field.id, value);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_fecha_format() {
        let fecha = today_fecha();
        let parts: Vec<&str> = fecha.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_coordinate_fields() {
        let fields = coordinate_fields("19.5", "-99.1").unwrap();
        assert_eq!(fields.lat, "19.500000");
        assert_eq!(fields.lon, "-99.100000");
        assert!(coordinate_fields("91", "0").is_none());
        assert!(coordinate_fields("norte", "0").is_none());
    }

    #[test]
    fn test_coordinate_prompts_mark_required() {
        assert_eq!(coordinate_prompt(ids::LAT), "Latitud *");
        assert_eq!(coordinate_prompt(ids::LON), "Longitud *");
    }

    #[test]
    fn test_new_record_sets_fecha_only() {
        let record = new_record();
        assert_eq!(record.get(ids::FECHA), today_fecha());
        assert_eq!(record.get(ids::FOLIO), "");
        assert_eq!(record.len(), WORK_ORDER_FIELDS.len());
    }
}
