//! Biblioteca común de Catastro
//!
//! Lógica de órdenes de trabajo compartida por el formulario web (WASM) y la
//! CLI: registro, exportación CSV, envío y sincronización de coordenadas.

pub mod backend;
pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod fields;
pub mod geo;
pub mod marker;
pub mod record;
pub mod submit;
pub mod validation;

pub use backend::{simulated_response, Backend, Receipt, ServerResponse};
pub use config::{BackendConfig, MapConfig};
pub use error::{Error, Result};
pub use export::{csv_file_name, record_to_csv};
pub use fields::{blank_record, FieldKind, FieldSpec, WORK_ORDER_FIELDS};
pub use geo::{Coordinate, CoordinateFields, GeolocationError};
pub use marker::{FormMapSync, ManualEntry, MapWidget, MarkerSync};
pub use record::FormRecord;
pub use submit::{SubmitPolicy, Submitter};
pub use validation::validate_required;
