use tokio::time::Instant;

use super::Mode;

/// Everything a backend needs to answer one turn.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub turn: u64,
    pub text: String,
    pub mode: Mode,
    pub submitted_at: Instant,
}

impl TurnRequest {
    pub fn new(turn: u64, text: &str, mode: Mode) -> Self {
        Self {
            turn,
            text: text.to_string(),
            mode,
            submitted_at: Instant::now(),
        }
    }
}
