use super::Reply;
use crate::errors::AssistantError;

/// Results flowing back from spawned turns to the widget that owns the session.
#[derive(Debug)]
pub enum Event {
    ReplyReady { turn: u64, reply: Reply },
    ReplyFailed { turn: u64, error: AssistantError },
}

impl Event {
    pub fn turn(&self) -> u64 {
        match self {
            Event::ReplyReady { turn, .. } => *turn,
            Event::ReplyFailed { turn, .. } => *turn,
        }
    }
}
