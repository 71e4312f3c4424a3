use crate::client::{ApiClient, ClientError};
use crate::models::ConversationMessage;

/// The audience Q&A panel: the conversation so far plus the question being
/// typed.
#[derive(Debug, Default)]
pub struct QaPanel {
    messages: Vec<ConversationMessage>,
    draft: String,
    user_name: String,
    loading: bool,
    error: Option<String>,
}

impl QaPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = user_name.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the whole conversation again; also the retry after an error.
    pub async fn reload(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        match client.get_conversation().await {
            Ok(messages) => {
                self.messages = messages;
                self.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Error loading conversation: {}", error);
                self.error = Some("Failed to load conversation".to_string());
                Err(error)
            }
        }
    }

    /// Sends the draft. A blank draft is ignored and returns `Ok(None)`.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
    ) -> Result<Option<ConversationMessage>, ClientError> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return Ok(None);
        }

        let user = Some(self.user_name.trim()).filter(|name| !name.is_empty());
        self.loading = true;
        let result = client.add_message(&text, user).await;
        self.loading = false;

        match result {
            Ok(message) => {
                self.messages.push(message.clone());
                self.draft.clear();
                self.error = None;
                Ok(Some(message))
            }
            Err(error) => {
                tracing::warn!("Error sending message: {}", error);
                self.error = Some("Failed to send message".to_string());
                Err(error)
            }
        }
    }
}
