use crate::error::{CatastroError, Result};
use catastro_common::BackendConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reemplaza el endpoint configurado.
pub const ENDPOINT_ENV: &str = "CATASTRO_BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // El entorno tiene prioridad sobre el archivo
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.is_empty() {
                config.backend.endpoint = endpoint;
            }
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatastroError::Config("No se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("catastro-orden").join("config.json"))
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.backend.endpoint = endpoint;
        self.save()
    }

    pub fn set_simulate(&mut self, simulate: bool) -> Result<()> {
        self.backend.simulate = simulate;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_roundtrip_keeps_backend() {
        let mut config = Config::default();
        config.backend.endpoint = "https://catastro.example/api/orden".into();
        config.backend.simulate = false;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.backend, config.backend);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.backend, BackendConfig::default());
    }
}
