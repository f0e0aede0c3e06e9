#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: u64, role: Role, content: &str, timestamp: DateTime<Utc>) -> Message {
        Message {
            id,
            role,
            content: content.to_string(),
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Short local time, `HH:MM`.
    pub fn formatted_time(&self) -> String {
        self.formatted_time_in(&Local)
    }

    pub fn formatted_time_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.timestamp.with_timezone(tz).format("%H:%M").to_string()
    }
}
