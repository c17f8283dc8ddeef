use crate::error::Result;
use catastro_common::{csv_file_name, record_to_csv, FormRecord};
use std::path::{Path, PathBuf};

/// Los directorios (o rutas sin extensión) reciben el nombre por defecto.
pub fn output_path_for_csv(output: &Path, record: &FormRecord) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(csv_file_name(record))
    } else {
        output.to_path_buf()
    }
}

/// Escribe `record` como CSV y devuelve el archivo escrito.
pub fn export_csv(record: &FormRecord, output: &Path) -> Result<PathBuf> {
    let path = output_path_for_csv(output, record);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, record_to_csv(record))?;
    tracing::debug!(path = %path.display(), fields = record.len(), "CSV written");
    Ok(path)
}
