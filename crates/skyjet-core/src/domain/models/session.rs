#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use strum_macros::Display;
use uuid::Uuid;

use super::Message;
use super::Role;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Conversation state owned by a single widget.
///
/// The message log is append-only: ids grow by one per message and
/// timestamps never go backwards. `typing_indicator` is raised while at
/// least one submitted turn is still waiting for its reply.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    messages: Vec<Message>,
    typing_indicator: bool,
    visibility: Visibility,
    #[serde(skip)]
    turns_in_flight: usize,
}

impl Session {
    pub fn new(greeting: &str) -> Session {
        let created_at = Utc::now();
        let mut session = Session {
            id: Uuid::new_v4().to_string(),
            created_at,
            messages: vec![],
            typing_indicator: false,
            visibility: Visibility::Closed,
            turns_in_flight: 0,
        };
        session.append(Role::Assistant, greeting);

        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn typing_indicator(&self) -> bool {
        self.typing_indicator
    }

    pub fn turns_in_flight(&self) -> usize {
        self.turns_in_flight
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn append(&mut self, role: Role, content: &str) -> &Message {
        let id = self.messages.len() as u64 + 1;
        let mut timestamp = Utc::now();
        if let Some(last) = self.messages.last() {
            if timestamp < last.timestamp {
                timestamp = last.timestamp;
            }
        }

        self.messages.push(Message::new(id, role, content, timestamp));

        &self.messages[self.messages.len() - 1]
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turns_in_flight += 1;
        self.typing_indicator = true;
    }

    pub(crate) fn finish_turn(&mut self) {
        self.turns_in_flight = self.turns_in_flight.saturating_sub(1);
        self.typing_indicator = self.turns_in_flight > 0;
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    pub fn toggle(&mut self) -> Visibility {
        self.visibility = match self.visibility {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        };

        self.visibility
    }
}
