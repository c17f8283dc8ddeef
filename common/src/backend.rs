//! Respuesta del servidor y transporte
//!
//! El servidor asigna un folio y una imagen QR a cada orden enviada.
//! Los transportes viven en la página (fetch) y en la CLI (reqwest); ambos
//! implementan [`Backend`].

use crate::error::{Error, Result};
use crate::record::{ids, FormRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retardo del servidor simulado.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Cuerpo que devuelve el endpoint de folios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerResponse {
    pub success: bool,
    pub folio: String,
    pub qr_image_url: String,
}

/// Orden aceptada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub folio: String,
    pub qr_image_url: String,
}

impl ServerResponse {
    /// `success: false`, o un éxito sin folio, es un rechazo.
    pub fn into_receipt(self) -> Result<Receipt> {
        if !self.success {
            return Err(Error::Rejected(
                "Error en el servidor al generar el folio.".to_string(),
            ));
        }
        if self.folio.is_empty() {
            return Err(Error::Rejected("La respuesta no incluye folio.".to_string()));
        }
        Ok(Receipt {
            folio: self.folio,
            qr_image_url: self.qr_image_url,
        })
    }
}

impl Receipt {
    /// Escribe el folio asignado en el formulario.
    pub fn write_into(&self, record: &mut FormRecord) {
        record.set(ids::FOLIO, self.folio.clone());
    }

    pub fn saved_message(&self) -> String {
        format!("¡Orden guardada! Folio asignado: {}", self.folio)
    }
}

/// Alerta tras cualquier envío fallido.
pub const SUBMIT_FAILED_MESSAGE: &str = "Hubo un error al generar el folio. Intenta de nuevo.";
/// Estado del contenedor QR tras un envío fallido.
pub const SUBMIT_FAILED_STATUS: &str = "Error de conexión o servidor.";
pub const SENDING_STATUS: &str = "Enviando...";
pub const QR_ALT_TEXT: &str = "Código QR de la Orden";

/// Transporte hacia el endpoint de folios.
#[async_trait(?Send)]
pub trait Backend {
    /// Envía el registro una vez. Las implementaciones aplican `timeout` y lo
    /// reportan como [`Error::Timeout`]; las fallas de conexión son [`Error::Transport`].
    async fn send(&self, record: &FormRecord, timeout: Duration) -> Result<ServerResponse>;

    /// Espera entre intentos.
    async fn pause(&self, delay: Duration);
}

/// Respuesta del servidor simulado.
///
/// `sequence` es cualquier número del llamador (aleatorio en la práctica);
/// solo se usan sus últimos cuatro dígitos.
pub fn simulated_response(record: &FormRecord, sequence: u32, year: i32) -> ServerResponse {
    ServerResponse {
        success: true,
        folio: format!("CATA-{}{}", sequence % 10_000, year),
        qr_image_url: format!(
            "https://via.placeholder.com/100x100?text={}",
            record.get(ids::CLAVE).replace('-', "")
        ),
    }
}
