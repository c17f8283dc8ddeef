//! Formatos de exportación compartidos por la CLI y WASM.

pub mod csv_core;

pub use csv_core::{csv_file_name, escape_value, record_to_csv, CSV_MIME};
