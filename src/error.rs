use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatastroError {
    #[error(transparent)]
    Common(#[from] catastro_common::Error),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("No se encontró el archivo: {0}")]
    FileNotFound(String),

    #[error("Error de captura: {0}")]
    Prompt(String),

    #[error("Error HTTP: {0}")]
    Http(String),

    #[error("Error al leer JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for CatastroError {
    fn from(e: dialoguer::Error) -> Self {
        CatastroError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatastroError>;
