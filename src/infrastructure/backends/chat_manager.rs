#[cfg(test)]
#[path = "chat_manager_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_json::json;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatBackend;
use crate::domain::models::ChatError;
use crate::domain::models::Conversation;
use crate::domain::models::ConversationId;
use crate::domain::models::Message;
use crate::infrastructure::http::Fetch;

fn log_ownership_error(err: ChatError) -> ChatError {
    tracing::error!(error = ?err, "Backend returned a message from another conversation");
    return err;
}

/// Talks to the chat backend's `/chat` routes.
pub struct ChatManager {
    backend_url: String,
    fetch: Fetch,
}

impl ChatManager {
    pub fn new(config: &Config) -> ChatManager {
        return ChatManager::with_url(&config.get(ConfigKey::BackendURL));
    }

    pub fn with_url(backend_url: &str) -> ChatManager {
        return ChatManager {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            fetch: Fetch::default(),
        };
    }

    pub fn backend_url(&self) -> &str {
        return &self.backend_url;
    }
}

#[async_trait]
impl ChatBackend for ChatManager {
    #[allow(clippy::implicit_return)]
    async fn get_conversations(&self) -> Result<Vec<Conversation>, ChatError> {
        let url = format!("{url}/chat", url = self.backend_url);
        let mut conversations = self
            .fetch
            .get::<Vec<Conversation>>(&url)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Failed to fetch conversations");
                return ChatError::FetchConversations(err);
            })?;

        for conversation in conversations.iter_mut() {
            conversation.claim_messages().map_err(log_ownership_error)?;
        }

        tracing::debug!(count = conversations.len(), "Fetched conversations");
        return Ok(conversations);
    }

    #[allow(clippy::implicit_return)]
    async fn get_conversation(&self, id: ConversationId) -> Result<Conversation, ChatError> {
        let url = format!("{url}/chat/{id}", url = self.backend_url);
        let mut conversation = self
            .fetch
            .get::<Conversation>(&url)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, id = id.value(), "Failed to fetch conversation");
                return ChatError::FetchConversation { id, source: err };
            })?;

        if conversation.id != id {
            tracing::error!(
                expected = id.value(),
                actual = conversation.id.value(),
                "Backend returned the wrong conversation"
            );
            return Err(ChatError::ConversationMismatch {
                expected: id,
                actual: conversation.id,
            });
        }

        conversation.claim_messages().map_err(log_ownership_error)?;
        tracing::debug!(
            id = id.value(),
            messages = conversation.message_count(),
            "Fetched conversation"
        );
        return Ok(conversation);
    }

    #[allow(clippy::implicit_return)]
    async fn create_conversation(&self) -> Result<Conversation, ChatError> {
        let url = format!("{url}/chat", url = self.backend_url);
        let mut conversation = self
            .fetch
            .post::<Conversation>(&url, None)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Failed to create conversation");
                return ChatError::CreateConversation(err);
            })?;

        conversation.claim_messages().map_err(log_ownership_error)?;
        tracing::debug!(id = conversation.id.value(), "Created conversation");
        return Ok(conversation);
    }

    #[allow(clippy::implicit_return)]
    async fn send_message(
        &self,
        conversation_id: ConversationId,
        message: &str,
    ) -> Result<Message, ChatError> {
        let url = format!(
            "{url}/chat/{conversation_id}/messages",
            url = self.backend_url
        );
        let body = json!({ "message": message }).to_string();

        let mut created = self
            .fetch
            .post::<Message>(&url, Some(body))
            .await
            .map_err(|err| {
                tracing::error!(
                    error = ?err,
                    conversation_id = conversation_id.value(),
                    "Failed to send message"
                );
                return ChatError::SendMessage {
                    conversation_id,
                    source: err,
                };
            })?;

        created
            .assign_conversation(conversation_id)
            .map_err(log_ownership_error)?;
        return Ok(created);
    }
}
