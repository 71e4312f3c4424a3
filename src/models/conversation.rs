use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ANONYMOUS_USER: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Question,
    Answer,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: i64,
    pub user: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// Body of `POST /api/conversation`. Both fields are optional on the wire so a
/// missing `message` can be answered with a 400 instead of a decode failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// A validated message waiting for its id and timestamp.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub user: String,
    pub message: String,
    pub kind: MessageKind,
}

impl NewMessage {
    pub fn question(user: Option<&str>, message: &str) -> Self {
        let user = user
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_USER);

        Self {
            user: user.to_string(),
            message: message.trim().to_string(),
            kind: MessageKind::Question,
        }
    }
}
