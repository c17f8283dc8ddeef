//! Exportación CSV de una orden de trabajo
//!
//! Una fila de encabezado (ids de campo) y una fila de datos. Cada valor va
//! entre comillas, las comillas se duplican y los saltos de línea se vuelven
//! espacios para que los datos queden en una sola fila.

use crate::record::{ids, FormRecord};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const FILE_PREFIX: &str = "Orden_Trabajo_";

/// Entrecomilla un valor de la fila de datos.
pub fn escape_value(value: &str) -> String {
    let flattened = value.replace("\r\n", " ").replace(['\r', '\n'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

/// Encabezado, un `\n` y la fila de datos. Sin salto de línea final.
pub fn record_to_csv(record: &FormRecord) -> String {
    let header = record.keys().collect::<Vec<_>>().join(",");
    let values = record
        .values()
        .map(escape_value)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}\n{}", header, values)
}

/// `Orden_Trabajo_<clave>.csv`
///
/// Los caracteres no válidos en un nombre de archivo se reemplazan por `_`.
pub fn csv_file_name(record: &FormRecord) -> String {
    let clave: String = record
        .get(ids::CLAVE)
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}.csv", FILE_PREFIX, clave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_work_order() {
        let record = FormRecord::from_fields([
            ("nombre", "Casa A"),
            ("clave", "AB-12"),
            ("lat", "19.29"),
            ("lon", "-98.98"),
        ]);

        assert_eq!(csv_file_name(&record), "Orden_Trabajo_AB-12.csv");
        assert_eq!(
            record_to_csv(&record),
            "nombre,clave,lat,lon\n\"Casa A\",\"AB-12\",\"19.29\",\"-98.98\""
        );
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape_value("\"a,b\""), "\"\"\"a,b\"\"\"");
    }

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(escape_value("línea 1\nlínea 2"), "\"línea 1 línea 2\"");
        assert_eq!(escape_value("a\r\nb"), "\"a b\"");
        assert_eq!(escape_value("a\rb"), "\"a b\"");
    }

    #[test]
    fn test_empty_values_are_quoted() {
        let record = FormRecord::from_fields([("folio", ""), ("clave", "X")]);
        assert_eq!(record_to_csv(&record), "folio,clave\n\"\",\"X\"");
    }

    #[test]
    fn test_header_follows_gather_order() {
        let record = FormRecord::from_fields([("z", "1"), ("a", "2"), ("m", "3")]);
        let csv = record_to_csv(&record);
        assert_eq!(csv.lines().next(), Some("z,a,m"));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_file_name_sanitizes_clave() {
        let record = FormRecord::from_fields([("clave", "07/123:A")]);
        assert_eq!(csv_file_name(&record), "Orden_Trabajo_07_123_A.csv");

        let empty = FormRecord::new();
        assert_eq!(csv_file_name(&empty), "Orden_Trabajo_.csv");
    }
}
