//! Verificación de campos requeridos antes del envío

use crate::error::{Error, Result};
use crate::record::{ids, FormRecord};

/// Campos que no pueden estar vacíos para enviar una orden.
pub const REQUIRED_FIELDS: &[&str] = &[ids::CLAVE, ids::LAT, ids::LON, ids::NOMBRE];

/// Alerta cuando algún campo requerido está vacío.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Por favor, completa los campos requeridos (Nombre, Clave Catastral, Latitud y Longitud).";

/// Solo revisa cadenas vacías; un campo con espacios cuenta como lleno.
pub fn validate_required(record: &FormRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|id| record.get(id).is_empty())
        .map(|id| id.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormRecord {
        FormRecord::from_fields([
            ("nombre", "Casa A"),
            ("clave", "AB-12"),
            ("lat", "19.29"),
            ("lon", "-98.98"),
        ])
    }

    #[test]
    fn test_complete_record_passes() {
        assert!(validate_required(&complete()).is_ok());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for id in REQUIRED_FIELDS {
            let mut record = complete();
            record.set(*id, "");
            match validate_required(&record) {
                Err(Error::MissingFields(missing)) => assert_eq!(missing, vec![id.to_string()]),
                other => panic!("expected MissingFields for {}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_absent_fields_are_missing() {
        let record = FormRecord::from_fields([("nombre", "Casa A")]);
        match validate_required(&record) {
            Err(Error::MissingFields(missing)) => {
                assert_eq!(missing, vec!["clave", "lat", "lon"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
