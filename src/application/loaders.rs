#[cfg(test)]
#[path = "loaders_test.rs"]
mod tests;

use serde_derive::Serialize;
use thiserror::Error;

use crate::domain::models::ChatBackend;
use crate::domain::models::ChatError;
use crate::domain::models::ConversationId;
use crate::domain::models::ConversationView;
use crate::domain::models::MessageView;

/// Errors surfaced to the renderer. Any of them aborts the page; the
/// backend failure stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load conversations")]
    Conversations(#[source] ChatError),

    #[error("Failed to load conversation")]
    Conversation(#[source] ChatError),

    #[error("Failed to create conversation")]
    CreateConversation(#[source] ChatError),

    #[error("Failed to send message")]
    SendMessage(#[source] ChatError),

    #[error("Invalid conversation id: {0}")]
    InvalidConversationId(String),

    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Sidebar data shared by every page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutData {
    pub conversations: Vec<ConversationView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexData {
    pub conversations: Vec<ConversationView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationPage {
    pub conversation: ConversationView,
}

fn parse_conversation_id(conversation_id: &str) -> Result<ConversationId, LoadError> {
    return ConversationId::parse(conversation_id).ok_or_else(|| {
        tracing::error!(conversation_id, "Invalid conversation id");
        return LoadError::InvalidConversationId(conversation_id.to_string());
    });
}

pub async fn layout(backend: &dyn ChatBackend) -> Result<LayoutData, LoadError> {
    let conversations = backend.get_conversations().await.map_err(|err| {
        tracing::error!(error = ?err, "Error loading conversations");
        return LoadError::Conversations(err);
    })?;

    return Ok(LayoutData {
        conversations: conversations
            .into_iter()
            .map(ConversationView::from)
            .collect(),
    });
}

/// The index page lists the same conversations as the sidebar.
pub async fn index(backend: &dyn ChatBackend) -> Result<IndexData, LoadError> {
    let LayoutData { conversations } = layout(backend).await?;
    return Ok(IndexData { conversations });
}

pub async fn conversation(
    backend: &dyn ChatBackend,
    conversation_id: &str,
) -> Result<ConversationPage, LoadError> {
    let id = parse_conversation_id(conversation_id)?;
    let conversation = backend.get_conversation(id).await.map_err(|err| {
        tracing::error!(error = ?err, id = id.value(), "Error loading conversation");
        return LoadError::Conversation(err);
    })?;

    return Ok(ConversationPage {
        conversation: ConversationView::from(conversation),
    });
}

pub async fn create_conversation(backend: &dyn ChatBackend) -> Result<ConversationView, LoadError> {
    let conversation = backend.create_conversation().await.map_err(|err| {
        tracing::error!(error = ?err, "Error creating conversation");
        return LoadError::CreateConversation(err);
    })?;

    return Ok(ConversationView::from(conversation));
}

pub async fn send_message(
    backend: &dyn ChatBackend,
    conversation_id: &str,
    text: &str,
) -> Result<MessageView, LoadError> {
    let id = parse_conversation_id(conversation_id)?;
    if text.trim().is_empty() {
        return Err(LoadError::EmptyMessage);
    }

    let message = backend.send_message(id, text).await.map_err(|err| {
        tracing::error!(error = ?err, id = id.value(), "Error sending message");
        return LoadError::SendMessage(err);
    })?;

    return Ok(MessageView::from(message));
}
