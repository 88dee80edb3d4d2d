#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ChatError;
use super::ConversationId;
use super::Timestamp;

/// Kind of content a message carries. Decides how the content is rendered.
/// Kinds this client does not know about are kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    General,
    Calculator,
    File,
    Code,
    Other(String),
}

impl From<String> for MessageType {
    fn from(value: String) -> MessageType {
        return match value.as_str() {
            "general" => MessageType::General,
            "calculator" => MessageType::Calculator,
            "file" => MessageType::File,
            "code" => MessageType::Code,
            _ => MessageType::Other(value),
        };
    }
}

impl From<MessageType> for String {
    fn from(value: MessageType) -> String {
        return value.to_string();
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageType::General => "general",
            MessageType::Calculator => "calculator",
            MessageType::File => "file",
            MessageType::Code => "code",
            MessageType::Other(name) => name.as_str(),
        };
        return write!(f, "{name}");
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Model,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Role {
        return match value.as_str() {
            "user" => Role::User,
            "model" | "assistant" => Role::Model,
            _ => Role::Other(value),
        };
    }
}

impl From<Role> for String {
    fn from(value: Role) -> String {
        return value.to_string();
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::User => "user",
            Role::Model => "model",
            Role::Other(name) => name.as_str(),
        };
        return write!(f, "{name}");
    }
}

/// Message as the backend sends it. The backend omits `conversation_id` on
/// nested and freshly created messages, `ChatManager` fills it in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub role: Role,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_message: Option<String>,
}

impl Message {
    /// Ties the message to `conversation_id`, failing if it already belongs
    /// to a different conversation.
    pub fn assign_conversation(&mut self, conversation_id: ConversationId) -> Result<(), ChatError> {
        if let Some(current) = self.conversation_id {
            if current != conversation_id {
                return Err(ChatError::ForeignMessage {
                    message_id: self.id,
                    expected: conversation_id,
                    actual: current,
                });
            }
        }

        self.conversation_id = Some(conversation_id);
        return Ok(());
    }
}
