#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::quick_replies::suggestions_for;
use super::quick_replies::QuickReplySet;
use super::ReplyBackend;
use super::ResilientBackend;
use super::SimulatedBackend;
use crate::config::SkyjetConfig;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::Role;
use crate::domain::models::ServiceContext;
use crate::domain::models::Session;
use crate::domain::models::TurnRequest;
use crate::domain::models::Visibility;
use crate::domain::services::responses::DEFAULT_UNAVAILABLE_REPLY;
use crate::errors::AssistantError;

/// Turn controller and sole owner of a conversation session.
///
/// `submit_turn` appends the user message, raises the typing indicator and
/// spawns the backend call. The reply comes back as an [`Event`] on the
/// widget's channel and only lands in the session when the host passes it
/// to [`ChatWidget::apply`], so every mutation happens on the host's side.
///
/// Replies are released by [`ChatWidget::next_event`] in turn order: a turn
/// that finishes early is held until every earlier turn has been handed out,
/// so answers land in submission order on any runtime flavor and with any
/// backend latency.
///
/// Turns are not cancellable. Closing the widget leaves in-flight turns
/// running and their replies are still appended to the hidden session.
///
/// Submitting requires a running tokio runtime.
pub struct ChatWidget {
    session: Session,
    pending_input: String,
    backend: Arc<dyn ReplyBackend>,
    unavailable_reply: String,
    next_turn: u64,
    next_release: u64,
    held: BTreeMap<u64, Event>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
}

impl ChatWidget {
    pub fn new(backend: Arc<dyn ReplyBackend>, greeting: &str) -> ChatWidget {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        ChatWidget {
            session: Session::new(greeting),
            pending_input: String::new(),
            backend,
            unavailable_reply: DEFAULT_UNAVAILABLE_REPLY.to_string(),
            next_turn: 1,
            next_release: 1,
            held: BTreeMap::new(),
            event_tx,
            event_rx,
        }
    }

    pub fn from_config(config: &SkyjetConfig) -> ChatWidget {
        let simulated: Arc<dyn ReplyBackend> = Arc::new(SimulatedBackend::new(
            Duration::from_millis(config.assistant.latency_ms),
        ));

        let backend: Arc<dyn ReplyBackend> = if config.recovery.enabled {
            Arc::new(ResilientBackend::from_config(simulated, &config.recovery))
        } else {
            simulated
        };

        log::debug!(
            "Creating widget with {} backend ({} ms latency, recovery {})",
            backend.name(),
            config.assistant.latency_ms,
            if config.recovery.enabled { "on" } else { "off" }
        );

        ChatWidget::new(backend, &config.assistant.greeting)
            .with_unavailable_reply(&config.recovery.unavailable_reply)
    }

    pub fn with_unavailable_reply(mut self, text: &str) -> ChatWidget {
        self.unavailable_reply = text.to_string();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn typing_indicator(&self) -> bool {
        self.session.typing_indicator()
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_visible()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Whether the host should enable its send affordance.
    pub fn can_send(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }

    pub fn suggestions(&self, ctx: &ServiceContext) -> &'static QuickReplySet {
        suggestions_for(ctx.mode)
    }

    /// Starts a turn for `raw_text` in the context's current mode and returns
    /// its turn number. Blank input is dropped and returns `None`.
    pub fn submit_turn(&mut self, raw_text: &str, ctx: &ServiceContext) -> Option<u64> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            log::debug!("Ignoring blank submission");
            return None;
        }

        let turn = self.next_turn;
        self.next_turn += 1;

        self.session.append(Role::User, trimmed);
        self.session.begin_turn();

        log::info!(
            "Submitting turn {} in {} mode (emergency: {}, {} chars)",
            turn,
            ctx.mode,
            ctx.emergency,
            trimmed.chars().count()
        );

        let request = TurnRequest::new(turn, raw_text, ctx.mode);
        let backend = self.backend.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::spawn(async move { backend.reply(request).await }).await;
            let event = match outcome {
                Ok(Ok(reply)) => Event::ReplyReady { turn, reply },
                Ok(Err(error)) => Event::ReplyFailed { turn, error },
                Err(join_error) => Event::ReplyFailed {
                    turn,
                    error: AssistantError::BackendError(format!(
                        "Reply task for turn {} aborted: {}",
                        turn, join_error
                    )),
                },
            };

            if event_tx.send(event).is_err() {
                log::debug!("Widget dropped before turn {} completed", turn);
            }
        });

        Some(turn)
    }

    /// Submits the pending input, clearing it when the turn is accepted.
    pub fn submit_pending(&mut self, ctx: &ServiceContext) -> Option<u64> {
        let text = std::mem::take(&mut self.pending_input);
        let turn = self.submit_turn(&text, ctx);
        if turn.is_none() {
            self.pending_input = text;
        }

        turn
    }

    /// Copies a quick reply into the pending input. Never submits.
    pub fn select_suggestion(&mut self, ctx: &ServiceContext, index: usize) -> Option<&'static str> {
        let suggestion = *self.suggestions(ctx).get(index)?;
        self.pending_input = suggestion.to_string();

        Some(suggestion)
    }

    pub fn set_input(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    pub fn toggle_open(&mut self) -> Visibility {
        let visibility = self.session.toggle();
        log::debug!("Widget is now {}", visibility);

        visibility
    }

    pub fn open(&mut self) {
        self.session.open();
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn dispatch(&mut self, ctx: &ServiceContext, command: Command) {
        match command {
            Command::SubmitTurn(text) => {
                self.submit_turn(&text, ctx);
            }
            Command::SubmitPending => {
                self.submit_pending(ctx);
            }
            Command::SelectSuggestion(index) => {
                self.select_suggestion(ctx, index);
            }
            Command::SetInput(text) => self.set_input(&text),
            Command::ToggleOpen => {
                self.toggle_open();
            }
            Command::Open => self.open(),
            Command::Close => self.close(),
        }
    }

    /// Folds a finished turn into the session: lowers the typing indicator
    /// and appends the assistant message. The returned message is the host's
    /// cue to scroll to the latest entry. Events should come from
    /// [`ChatWidget::next_event`], which releases them in turn order.
    pub fn apply(&mut self, event: Event) -> &Message {
        self.session.finish_turn();

        match event {
            Event::ReplyReady { turn, reply } => {
                log::info!("Turn {} resolved to {}", turn, reply.category);
                self.session.append(Role::Assistant, &reply.text)
            }
            Event::ReplyFailed { turn, error } => {
                log::warn!("Turn {} failed, assistant unavailable: {}", turn, error);
                let text = self.unavailable_reply.clone();
                self.session.append(Role::Assistant, &text)
            }
        }
    }

    /// Waits for the oldest unreleased turn to finish. Returns `None` when
    /// nothing is in flight. Cancel safe.
    pub async fn next_event(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.held.remove(&self.next_release) {
                self.next_release += 1;
                return Some(event);
            }

            if self.session.turns_in_flight() == 0 {
                return None;
            }

            let event = self.event_rx.recv().await?;
            if event.turn() != self.next_release {
                log::debug!(
                    "Holding turn {} until turn {} completes",
                    event.turn(),
                    self.next_release
                );
            }
            self.held.insert(event.turn(), event);
        }
    }

    pub async fn pump(&mut self) -> Option<Message> {
        let event = self.next_event().await?;

        Some(self.apply(event).clone())
    }

    /// Applies replies until no turn is in flight.
    pub async fn settle(&mut self) -> Vec<Message> {
        let mut appended = vec![];
        while let Some(message) = self.pump().await {
            appended.push(message);
        }

        appended
    }

    pub fn snapshot_json(&self) -> Result<String, AssistantError> {
        Ok(serde_json::to_string_pretty(&self.session)?)
    }
}
