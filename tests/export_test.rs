//! Pruebas de integración de exportación CSV

use catastro_common::FormRecord;
use catastro_orden::export::{export_csv, output_path_for_csv};
use catastro_orden::io::{load_record, save_record};
use tempfile::tempdir;

fn sample_record() -> FormRecord {
    FormRecord::from_fields([
        ("nombre", "Casa A"),
        ("clave", "AB-12"),
        ("lat", "19.29"),
        ("lon", "-98.98"),
    ])
}

#[test]
fn test_export_into_directory_uses_clave_name() {
    let dir = tempdir().expect("Failed to create temp dir");

    let path = export_csv(&sample_record(), dir.path()).expect("CSV export failed");

    assert_eq!(path, dir.path().join("Orden_Trabajo_AB-12.csv"));
    let content = std::fs::read_to_string(&path).expect("CSV not written");
    assert_eq!(
        content,
        "nombre,clave,lat,lon\n\"Casa A\",\"AB-12\",\"19.29\",\"-98.98\""
    );
}

#[test]
fn test_export_to_explicit_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("salida").join("orden.csv");

    let path = export_csv(&sample_record(), &target).expect("CSV export failed");

    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_missing_clave_still_exports() {
    let dir = tempdir().expect("Failed to create temp dir");
    let record = FormRecord::from_fields([("nombre", "Sin clave")]);

    let path = output_path_for_csv(dir.path(), &record);
    assert_eq!(path.file_name().unwrap(), "Orden_Trabajo_.csv");
}

#[test]
fn test_saved_record_exports_same_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json = dir.path().join("orden.json");

    save_record(&json, &sample_record()).unwrap();
    let loaded = load_record(&json).unwrap();
    let path = export_csv(&loaded, dir.path()).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.starts_with("nombre,clave,lat,lon\n"));
}
