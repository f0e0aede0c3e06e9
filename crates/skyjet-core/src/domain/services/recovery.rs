//! Timeout and retry policy for reply backends.
//!
//! The simulated backend never fails, but a backend doing a real round-trip
//! can. This wrapper bounds every attempt with a timeout (answered with a
//! canned fallback reply), retries transient failures with exponential
//! backoff, and hands persistent failures back to the caller.

#[cfg(test)]
#[path = "recovery_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::responses::DEFAULT_FALLBACK_REPLY;
use super::ReplyBackend;
use crate::config::RecoveryConfig;
use crate::domain::models::Reply;
use crate::domain::models::ResponseCategory;
use crate::domain::models::TurnRequest;
use crate::errors::AssistantError;

#[derive(Clone)]
pub struct ResilientBackend {
    inner: Arc<dyn ReplyBackend>,
    timeout: Duration,
    max_retries: usize,
    backoff: Duration,
    fallback_reply: String,
}

impl ResilientBackend {
    pub fn new(inner: Arc<dyn ReplyBackend>) -> Self {
        Self {
            inner,
            timeout: Duration::from_millis(5000),
            max_retries: 2,
            backoff: Duration::from_millis(250),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }

    pub fn from_config(inner: Arc<dyn ReplyBackend>, config: &RecoveryConfig) -> Self {
        Self::new(inner)
            .with_timeout(Duration::from_millis(config.timeout_ms))
            .with_max_retries(config.max_retries)
            .with_backoff(Duration::from_millis(config.backoff_ms))
            .with_fallback_reply(&config.fallback_reply)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_fallback_reply(mut self, fallback_reply: &str) -> Self {
        self.fallback_reply = fallback_reply.to_string();
        self
    }
}

#[async_trait]
impl ReplyBackend for ResilientBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn reply(&self, request: TurnRequest) -> Result<Reply, AssistantError> {
        let mut attempt = 0;
        let mut delay = self.backoff;

        loop {
            let outcome = tokio::time::timeout(self.timeout, self.inner.reply(request.clone())).await;

            match outcome {
                Ok(Ok(reply)) => return Ok(reply),
                Err(_) => {
                    log::warn!(
                        "Backend {} timed out on turn {} after {} ms, using fallback reply",
                        self.inner.name(),
                        request.turn,
                        self.timeout.as_millis()
                    );
                    return Ok(Reply::new(ResponseCategory::Fallback, &self.fallback_reply));
                }
                Ok(Err(err)) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    log::warn!(
                        "Backend {} failed on turn {} (attempt {}), retrying in {} ms: {}",
                        self.inner.name(),
                        request.turn,
                        attempt,
                        delay.as_millis(),
                        err
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Ok(Err(err)) => {
                    log::error!(
                        "Backend {} gave up on turn {} after {} retries: {}",
                        self.inner.name(),
                        request.turn,
                        attempt,
                        err
                    );
                    return Err(err);
                }
            }
        }
    }
}
