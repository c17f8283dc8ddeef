//! Envío de órdenes de trabajo
//!
//! Validación, un envío a la vez y reintentos sobre un [`Backend`].

use crate::backend::{Backend, Receipt};
use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::record::FormRecord;
use crate::validation::validate_required;
use std::cell::Cell;
use std::time::Duration;

/// Tiempo de espera y reintentos de un envío.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPolicy {
    /// Por intento.
    pub timeout: Duration,
    /// Intentos totales, incluido el primero. Cero equivale a uno.
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl From<&BackendConfig> for SubmitPolicy {
    fn from(config: &BackendConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_attempts: config.max_attempts,
            retry_delay: config.retry_delay(),
        }
    }
}

pub struct Submitter<B> {
    backend: B,
    policy: Cell<SubmitPolicy>,
    in_flight: Cell<bool>,
}

/// Libera la marca de envío en curso al terminar, sea como sea.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<B: Backend> Submitter<B> {
    pub fn new(backend: B, policy: SubmitPolicy) -> Self {
        Self {
            backend,
            policy: Cell::new(policy),
            in_flight: Cell::new(false),
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy.get()
    }

    /// Aplica desde el siguiente envío.
    pub fn set_policy(&self, policy: SubmitPolicy) {
        self.policy.set(policy);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Valida y envía `record`.
    ///
    /// Si faltan campos requeridos falla antes de tocar la red. Una segunda
    /// llamada con otra en curso falla con [`Error::SubmissionInFlight`].
    /// Los errores de transporte y de tiempo se reintentan; un rechazo es final.
    pub async fn submit(&self, record: &FormRecord) -> Result<Receipt> {
        validate_required(record)?;
        let _guard = self.enter()?;

        let policy = self.policy.get();
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let outcome = self
                .backend
                .send(record, policy.timeout)
                .await
                .and_then(|response| response.into_receipt());

            match outcome {
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    attempt += 1;
                    self.backend.pause(policy.retry_delay).await;
                }
                other => return other,
            }
        }
    }

    fn enter(&self) -> Result<InFlight<'_>> {
        if self.in_flight.replace(true) {
            return Err(Error::SubmissionInFlight);
        }
        Ok(InFlight(&self.in_flight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ServerResponse;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Reproduce respuestas predefinidas y registra cada llamada.
    #[derive(Default)]
    struct ScriptedBackend {
        answers: RefCell<VecDeque<Result<ServerResponse>>>,
        sent: RefCell<Vec<(FormRecord, Duration)>>,
        pauses: RefCell<Vec<Duration>>,
    }

    impl ScriptedBackend {
        fn with(answers: Vec<Result<ServerResponse>>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl Backend for ScriptedBackend {
        async fn send(&self, record: &FormRecord, timeout: Duration) -> Result<ServerResponse> {
            self.sent.borrow_mut().push((record.clone(), timeout));
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Transport("no scripted answer".into())))
        }

        async fn pause(&self, delay: Duration) {
            self.pauses.borrow_mut().push(delay);
        }
    }

    fn ok_response(folio: &str) -> Result<ServerResponse> {
        Ok(ServerResponse {
            success: true,
            folio: folio.to_string(),
            qr_image_url: format!("https://qr/{}.png", folio),
        })
    }

    fn complete() -> FormRecord {
        FormRecord::from_fields([
            ("folio", ""),
            ("nombre", "Casa A"),
            ("clave", "AB-12"),
            ("lat", "19.29"),
            ("lon", "-98.98"),
        ])
    }

    fn policy(max_attempts: u32) -> SubmitPolicy {
        SubmitPolicy {
            timeout: Duration::from_secs(5),
            max_attempts,
            retry_delay: Duration::from_millis(250),
        }
    }

    #[test]
    fn test_missing_field_never_calls_backend() {
        for id in ["clave", "lat", "lon", "nombre"] {
            let submitter = Submitter::new(ScriptedBackend::with(vec![ok_response("X")]), policy(3));
            let mut record = complete();
            record.set(id, "");

            let result = block_on(submitter.submit(&record));
            assert!(matches!(result, Err(Error::MissingFields(_))));
            assert!(submitter.backend().sent.borrow().is_empty());
        }
    }

    #[test]
    fn test_successful_submission() {
        let submitter = Submitter::new(ScriptedBackend::with(vec![ok_response("CATA-1")]), policy(3));
        let receipt = block_on(submitter.submit(&complete())).unwrap();

        assert_eq!(receipt.folio, "CATA-1");
        let sent = submitter.backend().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, complete());
        assert_eq!(sent[0].1, Duration::from_secs(5));
        assert!(!submitter.is_busy());
    }

    #[test]
    fn test_transport_errors_are_retried() {
        let backend = ScriptedBackend::with(vec![
            Err(Error::Transport("connection reset".into())),
            Err(Error::Timeout(Duration::from_secs(5))),
            ok_response("CATA-3"),
        ]);
        let submitter = Submitter::new(backend, policy(3));

        let receipt = block_on(submitter.submit(&complete())).unwrap();
        assert_eq!(receipt.folio, "CATA-3");
        assert_eq!(submitter.backend().sent.borrow().len(), 3);
        assert_eq!(
            *submitter.backend().pauses.borrow(),
            vec![Duration::from_millis(250); 2]
        );
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let backend = ScriptedBackend::with(vec![
            Err(Error::Timeout(Duration::from_secs(5))),
            Err(Error::Timeout(Duration::from_secs(5))),
            ok_response("never"),
        ]);
        let submitter = Submitter::new(backend, policy(2));

        let result = block_on(submitter.submit(&complete()));
        assert!(matches!(result, Err(Error::Timeout(_))));
        assert_eq!(submitter.backend().sent.borrow().len(), 2);
        assert!(!submitter.is_busy());
    }

    #[test]
    fn test_rejection_is_not_retried() {
        let backend = ScriptedBackend::with(vec![
            Ok(ServerResponse { success: false, ..Default::default() }),
            ok_response("never"),
        ]);
        let submitter = Submitter::new(backend, policy(3));

        let result = block_on(submitter.submit(&complete()));
        assert!(matches!(result, Err(Error::Rejected(_))));
        assert_eq!(submitter.backend().sent.borrow().len(), 1);
    }

    #[test]
    fn test_policy_change_applies_to_next_submission() {
        let backend = ScriptedBackend::with(vec![
            Err(Error::Transport("down".into())),
            ok_response("never"),
        ]);
        let submitter = Submitter::new(backend, policy(3));
        submitter.set_policy(policy(1));

        assert!(block_on(submitter.submit(&complete())).is_err());
        assert_eq!(submitter.backend().sent.borrow().len(), 1);
        assert_eq!(submitter.policy().max_attempts, 1);
    }

    #[test]
    fn test_zero_attempts_still_sends_once() {
        let submitter = Submitter::new(ScriptedBackend::with(vec![ok_response("A")]), policy(0));
        assert!(block_on(submitter.submit(&complete())).is_ok());
    }

    #[test]
    fn test_second_submission_while_in_flight_is_refused() {
        let submitter = Submitter::new(ScriptedBackend::with(vec![ok_response("A")]), policy(1));
        let guard = submitter.enter().unwrap();
        assert!(submitter.is_busy());

        let result = block_on(submitter.submit(&complete()));
        assert!(matches!(result, Err(Error::SubmissionInFlight)));
        assert!(submitter.backend().sent.borrow().is_empty());

        drop(guard);
        assert!(!submitter.is_busy());
        assert!(block_on(submitter.submit(&complete())).is_ok());
    }
}
