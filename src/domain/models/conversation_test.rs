use anyhow::Result;
use test_utils::conversation_fixture;
use test_utils::conversation_list_fixture;

use super::Conversation;
use crate::domain::models::ChatError;
use crate::domain::models::ConversationId;
use crate::domain::models::MessageType;
use crate::domain::models::Role;

#[test]
fn it_deserializes_a_conversation_with_messages() -> Result<()> {
    let conversation: Conversation = serde_json::from_str(conversation_fixture())?;

    assert_eq!(conversation.id, ConversationId::new(42));
    assert_eq!(conversation.title, "Arithmetic");
    assert_eq!(conversation.message_count(), 2);
    assert_eq!(conversation.created_at.as_str(), "2024-03-01T10:14:59.000000");
    assert_eq!(conversation.updated_at.as_str(), "2024-03-01T10:15:02.000000");

    let messages = conversation.messages.unwrap();
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Model);
    assert_eq!(messages[1].message_type, MessageType::Calculator);
    assert_eq!(messages[1].original_message, Some("2 + 2".to_string()));

    return Ok(());
}

#[test]
fn it_deserializes_list_entries_without_messages() -> Result<()> {
    let conversations: Vec<Conversation> = serde_json::from_str(conversation_list_fixture())?;

    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0].messages, None);
    assert_eq!(conversations[0].message_count(), 0);
    assert_eq!(conversations[1].messages, Some(vec![]));

    return Ok(());
}

#[test]
fn it_claims_nested_messages() -> Result<()> {
    let mut conversation: Conversation = serde_json::from_str(conversation_fixture())?;
    conversation.claim_messages()?;

    for message in conversation.messages.unwrap() {
        assert_eq!(message.conversation_id, Some(ConversationId::new(42)));
    }

    return Ok(());
}

#[test]
fn it_rejects_foreign_messages() -> Result<()> {
    let mut conversation: Conversation = serde_json::from_str(conversation_fixture())?;
    if let Some(messages) = conversation.messages.as_mut() {
        messages[1].conversation_id = Some(ConversationId::new(9));
    }

    let res = conversation.claim_messages();
    assert!(matches!(res, Err(ChatError::ForeignMessage { message_id: 2, .. })));

    return Ok(());
}
