use crate::error::{CatastroError, Result};
use catastro_common::FormRecord;
use std::fs;
use std::path::Path;

pub fn load_record(path: &Path) -> Result<FormRecord> {
    if !path.exists() {
        return Err(CatastroError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let record: FormRecord = serde_json::from_str(&content)?;
    Ok(record)
}

pub fn save_record(path: &Path, record: &FormRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(record)?;
    fs::write(path, content)?;
    Ok(())
}
