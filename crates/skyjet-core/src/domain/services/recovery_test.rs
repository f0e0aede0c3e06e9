use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use tokio::time::Instant;

use super::*;
use crate::domain::models::Mode;

struct FlakyBackend {
    failures: usize,
    error: AssistantError,
    calls: AtomicUsize,
}

impl FlakyBackend {
    fn new(failures: usize, error: AssistantError) -> Arc<Self> {
        Arc::new(Self {
            failures,
            error,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReplyBackend for FlakyBackend {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn reply(&self, request: TurnRequest) -> Result<Reply, AssistantError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(self.error.clone());
        }

        Ok(Reply::new(ResponseCategory::ExecutiveGeneral, &request.text))
    }
}

struct StalledBackend {}

#[async_trait]
impl ReplyBackend for StalledBackend {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn reply(&self, _request: TurnRequest) -> Result<Reply, AssistantError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(AssistantError::BackendError("unreachable".to_string()))
    }
}

fn request(text: &str) -> TurnRequest {
    TurnRequest::new(1, text, Mode::Executive)
}

#[tokio::test(start_paused = true)]
async fn it_retries_transient_failures_with_doubling_backoff() {
    let inner = FlakyBackend::new(2, AssistantError::BackendError("503".to_string()));
    let backend = ResilientBackend::new(inner.clone())
        .with_max_retries(2)
        .with_backoff(Duration::from_millis(100));

    let started = Instant::now();
    let reply = backend.reply(request("hola")).await.unwrap();

    assert_eq!(reply.text, "hola");
    assert_eq!(inner.calls(), 3);
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(started.elapsed() < Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn it_returns_the_last_error_when_retries_run_out() {
    let inner = FlakyBackend::new(usize::MAX, AssistantError::BackendError("down".to_string()));
    let backend = ResilientBackend::new(inner.clone()).with_max_retries(1);

    let err = backend.reply(request("hola")).await.unwrap_err();

    assert_eq!(err, AssistantError::BackendError("down".to_string()));
    assert_eq!(inner.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn it_does_not_retry_permanent_failures() {
    let inner = FlakyBackend::new(1, AssistantError::ValidationError("bad".to_string()));
    let backend = ResilientBackend::new(inner.clone()).with_max_retries(3);

    let err = backend.reply(request("hola")).await.unwrap_err();

    assert!(matches!(err, AssistantError::ValidationError(_)));
    assert_eq!(inner.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn it_answers_with_the_fallback_reply_on_timeout() {
    let backend = ResilientBackend::new(Arc::new(StalledBackend {}))
        .with_timeout(Duration::from_millis(750))
        .with_fallback_reply("Sin respuesta");

    let started = Instant::now();
    let reply = backend.reply(request("precio")).await.unwrap();

    assert_eq!(reply.category, ResponseCategory::Fallback);
    assert_eq!(reply.text, "Sin respuesta");
    assert!(started.elapsed() >= Duration::from_millis(750));
    assert!(started.elapsed() < Duration::from_secs(3600));
    assert_eq!(backend.name(), "stalled");
}

#[tokio::test(start_paused = true)]
async fn it_builds_from_recovery_config() {
    let config = RecoveryConfig {
        enabled: true,
        timeout_ms: 50,
        max_retries: 0,
        backoff_ms: 10,
        fallback_reply: "fallback".to_string(),
        unavailable_reply: "unavailable".to_string(),
    };
    let inner = FlakyBackend::new(1, AssistantError::BackendError("blip".to_string()));
    let backend = ResilientBackend::from_config(inner.clone(), &config);

    assert!(backend.reply(request("hola")).await.is_err());
    assert_eq!(inner.calls(), 1);

    let stalled = ResilientBackend::from_config(Arc::new(StalledBackend {}), &config);
    let reply = stalled.reply(request("hola")).await.unwrap();
    assert_eq!(reply.text, "fallback");
}
