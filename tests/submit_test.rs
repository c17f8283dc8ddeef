//! Envío contra un servidor falso local

use catastro_common::{Error, FormRecord, SubmitPolicy, Submitter, Backend};
use catastro_orden::backend::{HttpBackend, SimulatedBackend};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn complete_record() -> FormRecord {
    FormRecord::from_fields([
        ("folio", ""),
        ("nombre", "Casa A"),
        ("clave", "AB-12"),
        ("lat", "19.29"),
        ("lon", "-98.98"),
    ])
}

fn policy(timeout_ms: u64, max_attempts: u32) -> SubmitPolicy {
    SubmitPolicy {
        timeout: Duration::from_millis(timeout_ms),
        max_attempts,
        retry_delay: Duration::from_millis(10),
    }
}

/// Responde cada conexión con `status` y `body`; devuelve la URL base.
async fn serve(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{}/api/generar-orden.php", addr)
}

/// Acepta conexiones y nunca responde.
async fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_http_backend_returns_folio() {
    let url = serve(
        "200 OK",
        r#"{"success":true,"folio":"CATA-00422026","qrImageUrl":"https://qr.example/AB12.png"}"#,
    )
    .await;
    let submitter = Submitter::new(HttpBackend::new(&url).unwrap(), policy(2000, 1));

    let receipt = submitter.submit(&complete_record()).await.unwrap();
    assert_eq!(receipt.folio, "CATA-00422026");
    assert_eq!(receipt.qr_image_url, "https://qr.example/AB12.png");

    let mut record = complete_record();
    receipt.write_into(&mut record);
    assert_eq!(record.get("folio"), "CATA-00422026");
}

#[tokio::test]
async fn test_http_backend_unsuccessful_answer_is_rejection() {
    let url = serve("200 OK", r#"{"success":false}"#).await;
    let submitter = Submitter::new(HttpBackend::new(&url).unwrap(), policy(2000, 3));

    let result = submitter.submit(&complete_record()).await;
    assert!(matches!(result, Err(Error::Rejected(_))));
}

#[tokio::test]
async fn test_http_client_error_is_rejection() {
    let url = serve("400 Bad Request", "{}").await;
    let backend = HttpBackend::new(&url).unwrap();

    let result = backend.send(&complete_record(), Duration::from_secs(2)).await;
    assert!(matches!(result, Err(Error::Rejected(_))));
}

#[tokio::test]
async fn test_http_server_error_is_retryable() {
    let url = serve("503 Service Unavailable", "{}").await;
    let backend = HttpBackend::new(&url).unwrap();

    let err = backend
        .send(&complete_record(), Duration::from_secs(2))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_silent_backend_times_out() {
    let url = serve_silent().await;
    let submitter = Submitter::new(HttpBackend::new(&url).unwrap(), policy(100, 2));

    let result = submitter.submit(&complete_record()).await;
    assert!(matches!(result, Err(Error::Timeout(_))));
    assert!(!submitter.is_busy());
}

#[tokio::test]
async fn test_missing_fields_never_reach_backend() {
    let url = serve_silent().await;
    let submitter = Submitter::new(HttpBackend::new(&url).unwrap(), policy(100, 1));
    let mut record = complete_record();
    record.set("nombre", "");

    let result = submitter.submit(&record).await;
    assert!(matches!(result, Err(Error::MissingFields(fields)) if fields == ["nombre"]));
}

#[tokio::test]
async fn test_simulated_submission_end_to_end() {
    let backend = SimulatedBackend::new(Duration::from_millis(5));
    let submitter = Submitter::new(backend, policy(1000, 1));

    let receipt = submitter.submit(&complete_record()).await.unwrap();
    assert!(receipt.folio.starts_with("CATA-"));
    assert!(receipt.qr_image_url.contains("text=AB12"));
    assert!(receipt.saved_message().ends_with(&receipt.folio));
}
