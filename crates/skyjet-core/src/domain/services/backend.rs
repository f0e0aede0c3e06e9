use std::time::Duration;

use async_trait::async_trait;

use super::IntentResolver;
use crate::domain::models::Reply;
use crate::domain::models::TurnRequest;
use crate::errors::AssistantError;

/// Where a turn's reply comes from.
#[async_trait]
pub trait ReplyBackend: Send + Sync {
    fn name(&self) -> &str;
    async fn reply(&self, request: TurnRequest) -> Result<Reply, AssistantError>;
}

/// Local keyword resolver behind a fixed, simulated round-trip.
///
/// The wait is anchored at the request's submission instant, so turns with
/// the same latency complete in the order they were submitted.
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedBackend {
    fn default() -> SimulatedBackend {
        SimulatedBackend::new(Duration::from_millis(crate::config::DEFAULT_LATENCY_MS))
    }
}

#[async_trait]
impl ReplyBackend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn reply(&self, request: TurnRequest) -> Result<Reply, AssistantError> {
        tokio::time::sleep_until(request.submitted_at + self.latency).await;

        Ok(IntentResolver::resolve(&request.text, request.mode))
    }
}
