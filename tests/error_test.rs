//! Pruebas de manejo de errores

use catastro_orden::error::CatastroError;
use catastro_orden::io::load_record;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_load_nonexistent_record() {
    let result = load_record(Path::new("/nonexistent/path/orden.json"));
    assert!(matches!(result.unwrap_err(), CatastroError::FileNotFound(_)));
}

#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("orden.json");
    std::fs::write(&path, "{ no es json").unwrap();

    let result = load_record(&path);
    assert!(matches!(result.unwrap_err(), CatastroError::JsonParse(_)));
}

#[test]
fn test_error_display() {
    let errors = vec![
        CatastroError::Config("URL inválida".to_string()),
        CatastroError::FileNotFound("orden.json".to_string()),
        CatastroError::Prompt("cancelado".to_string()),
        CatastroError::Http("sin conexión".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

#[test]
fn test_common_error_is_transparent() {
    let err: CatastroError =
        catastro_common::Error::MissingFields(vec!["clave".into(), "lat".into()]).into();
    assert_eq!(err.to_string(), "Missing required fields: clave, lat");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CatastroError = io_err.into();
    assert!(matches!(err, CatastroError::Io(_)));
}
