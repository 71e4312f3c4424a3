use std::sync::RwLock;

use chrono::Utc;

use crate::models::{ConversationMessage, NewMessage};

pub trait ConversationRepository: Send + Sync {
    fn list(&self) -> Vec<ConversationMessage>;

    fn count(&self) -> usize;

    /// Stores the message and returns it with its assigned id and timestamp.
    fn append(&self, draft: NewMessage) -> ConversationMessage;
}

#[derive(Debug, Default)]
pub struct InMemoryConversations {
    messages: RwLock<Vec<ConversationMessage>>,
}

impl InMemoryConversations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Vec<ConversationMessage>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }
}

impl ConversationRepository for InMemoryConversations {
    fn list(&self) -> Vec<ConversationMessage> {
        super::read(&self.messages).clone()
    }

    fn count(&self) -> usize {
        super::read(&self.messages).len()
    }

    fn append(&self, draft: NewMessage) -> ConversationMessage {
        let mut messages = super::write(&self.messages);
        // Messages are never removed, so count + 1 stays unique as long as
        // the id is taken under the same write lock as the push.
        let message = ConversationMessage {
            id: messages.len() as i64 + 1,
            user: draft.user,
            message: draft.message,
            timestamp: Utc::now(),
            kind: draft.kind,
        };
        messages.push(message.clone());
        message
    }
}
