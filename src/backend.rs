//! Transportes de folio para la CLI

use crate::config::Config;
use crate::error::{CatastroError, Result};
use async_trait::async_trait;
use catastro_common::backend::SIMULATED_DELAY;
use catastro_common::{simulated_response, Backend, FormRecord, ServerResponse};
use chrono::Datelike;
use std::time::Duration;

/// Envía el registro como JSON por POST a una URL absoluta.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpBackend {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            CatastroError::Config(format!(
                "La URL del servidor debe ser absoluta ({}): {}",
                endpoint, e
            ))
        })?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("catastro-orden/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatastroError::Http(e.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send(
        &self,
        record: &FormRecord,
        timeout: Duration,
    ) -> catastro_common::Result<ServerResponse> {
        use catastro_common::Error;

        tracing::debug!(endpoint = %self.endpoint, "POST work order");
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(timeout)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(timeout)
                } else {
                    Error::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "backend answered with an error status");
            // Un 5xx puede resolverse al reintentar; lo demás es un rechazo del servidor.
            return Err(if status.is_server_error() {
                Error::Transport(format!("HTTP {}", status))
            } else {
                Error::Rejected(format!("HTTP {}", status))
            });
        }

        response.json::<ServerResponse>().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(timeout)
            } else {
                Error::Transport(format!("Invalid response: {}", e))
            }
        })
    }

    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Responde localmente, como la página sin servidor real.
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

#[async_trait(?Send)]
impl Backend for SimulatedBackend {
    async fn send(
        &self,
        record: &FormRecord,
        timeout: Duration,
    ) -> catastro_common::Result<ServerResponse> {
        if self.delay > timeout {
            tokio::time::sleep(timeout).await;
            return Err(catastro_common::Error::Timeout(timeout));
        }
        tokio::time::sleep(self.delay).await;

        let now = chrono::Local::now();
        let sequence = now.timestamp_subsec_nanos();
        Ok(simulated_response(record, sequence, now.year()))
    }

    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Cualquiera de los dos transportes, según configuración y opciones.
pub enum CliBackend {
    Http(HttpBackend),
    Simulated(SimulatedBackend),
}

impl CliBackend {
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.backend.simulate {
            Ok(CliBackend::Simulated(SimulatedBackend::default()))
        } else {
            Ok(CliBackend::Http(HttpBackend::new(&config.backend.endpoint)?))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CliBackend::Http(http) => http.endpoint.to_string(),
            CliBackend::Simulated(_) => "servidor simulado".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for CliBackend {
    async fn send(
        &self,
        record: &FormRecord,
        timeout: Duration,
    ) -> catastro_common::Result<ServerResponse> {
        match self {
            CliBackend::Http(b) => b.send(record, timeout).await,
            CliBackend::Simulated(b) => b.send(record, timeout).await,
        }
    }

    async fn pause(&self, delay: Duration) {
        match self {
            CliBackend::Http(b) => b.pause(delay).await,
            CliBackend::Simulated(b) => b.pause(delay).await,
        }
    }
}
