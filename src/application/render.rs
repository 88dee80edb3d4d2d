#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use anyhow::Result;
use serde::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use crate::domain::models::ConversationView;
use crate::domain::models::MessageType;
use crate::domain::models::MessageView;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(text: String) -> Option<OutputFormat> {
        return OutputFormat::iter().find(|e| return e.to_string() == text);
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    return Ok(serde_json::to_string_pretty(value)?);
}

fn message_body(message: &MessageView) -> String {
    match &message.message_type {
        MessageType::Calculator => {
            if let Some(original) = &message.original_message {
                return format!("{original} = {}", message.content);
            }
            return message.content.to_string();
        }
        MessageType::Code => return format!("```\n{}\n```", message.content),
        MessageType::File => return format!("file: {}", message.content),
        MessageType::General | MessageType::Other(_) => return message.content.to_string(),
    }
}

pub fn render_conversations(
    conversations: &[ConversationView],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&conversations);
    }

    if conversations.is_empty() {
        return Ok(
            "There are no conversations yet. Start one with `chatview create`.".to_string(),
        );
    }

    let lines = conversations
        .iter()
        .map(|conversation| {
            return format!(
                "#{} {} (updated {})",
                conversation.id,
                conversation.title,
                conversation.updated_at.display()
            );
        })
        .collect::<Vec<String>>();

    return Ok(lines.join("\n"));
}

pub fn render_conversation(conversation: &ConversationView, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(conversation);
    }

    let mut res = format!(
        "#{} {}\ncreated {}, updated {}",
        conversation.id,
        conversation.title,
        conversation.created_at.display(),
        conversation.updated_at.display()
    );

    let messages = conversation.messages.as_deref().unwrap_or_default();
    if messages.is_empty() {
        res = format!("{res}\n\nNo messages yet.");
    } else {
        let lines = messages
            .iter()
            .map(|message| return format!("[{}] {}", message.role, message_body(message)))
            .collect::<Vec<String>>()
            .join("\n");
        res = format!("{res}\n\n{lines}");
    }

    return Ok(res);
}

pub fn render_message(message: &MessageView, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(message);
    }

    return Ok(format!("[{}] {}", message.role, message_body(message)));
}
