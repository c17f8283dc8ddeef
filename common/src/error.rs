//! Tipos de error

use std::time::Duration;
use thiserror::Error;

/// Error compartido
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Backend rejected the work order: {0}")]
    Rejected(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Si otro intento podría tener éxito.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout(_))
    }
}

/// Alias de Result
pub type Result<T> = std::result::Result<T, Error>;
