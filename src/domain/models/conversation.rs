#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ChatError;
use super::ConversationId;
use super::Message;
use super::Timestamp;

/// Conversation as the backend sends it. List responses may leave out
/// `messages` entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Conversation {
    /// Stamps every nested message with this conversation's id. Messages that
    /// already point at another conversation are rejected.
    pub fn claim_messages(&mut self) -> Result<(), ChatError> {
        let id = self.id;
        if let Some(messages) = self.messages.as_mut() {
            for message in messages.iter_mut() {
                message.assign_conversation(id)?;
            }
        }

        return Ok(());
    }

    pub fn message_count(&self) -> usize {
        return self
            .messages
            .as_ref()
            .map(|messages| return messages.len())
            .unwrap_or(0);
    }
}
