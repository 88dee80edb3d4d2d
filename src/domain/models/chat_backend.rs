use async_trait::async_trait;

use super::ChatError;
use super::Conversation;
use super::ConversationId;
use super::Message;

pub type ChatBackendBox = Box<dyn ChatBackend>;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Lists every conversation the backend stores. Entries may come without
    /// their messages.
    async fn get_conversations(&self) -> Result<Vec<Conversation>, ChatError>;

    /// Fetches one conversation with its messages in order. The returned
    /// conversation always carries the requested id.
    async fn get_conversation(&self, id: ConversationId) -> Result<Conversation, ChatError>;

    /// Asks the backend to start a new, empty conversation.
    async fn create_conversation(&self) -> Result<Conversation, ChatError>;

    /// Appends a user message to a conversation and returns the message the
    /// backend stored.
    async fn send_message(
        &self,
        conversation_id: ConversationId,
        message: &str,
    ) -> Result<Message, ChatError>;
}
