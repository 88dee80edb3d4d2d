#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

use serde_derive::Serialize;

use super::Conversation;
use super::ConversationId;
use super::Message;
use super::MessageType;
use super::Role;
use super::Timestamp;

/// Display record handed to the renderer. Field names follow the camelCase
/// convention of the display layer, values are copied from the DTO as is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: ConversationId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<MessageView>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub role: Role,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_message: Option<String>,
}

impl From<Conversation> for ConversationView {
    fn from(conversation: Conversation) -> ConversationView {
        return ConversationView {
            id: conversation.id,
            title: conversation.title,
            messages: conversation.messages.map(|messages| {
                return messages.into_iter().map(MessageView::from).collect();
            }),
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        };
    }
}

impl From<Message> for MessageView {
    fn from(message: Message) -> MessageView {
        return MessageView {
            id: message.id,
            conversation_id: message.conversation_id,
            content: message.content,
            message_type: message.message_type,
            role: message.role,
            created_at: message.created_at,
            original_message: message.original_message,
        };
    }
}
