use thiserror::Error;

use super::ConversationId;

/// Failure of a single HTTP round trip.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{method} {url} could not be completed")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{method} {url} returned a body that is not the expected JSON")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by a `ChatBackend`. Each operation has its own variant and
/// keeps the underlying `FetchError` as its source.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Failed to fetch conversations")]
    FetchConversations(#[source] FetchError),

    #[error("Failed to fetch conversation")]
    FetchConversation {
        id: ConversationId,
        #[source]
        source: FetchError,
    },

    #[error("Failed to create conversation")]
    CreateConversation(#[source] FetchError),

    #[error("Failed to send message")]
    SendMessage {
        conversation_id: ConversationId,
        #[source]
        source: FetchError,
    },

    #[error("Backend returned conversation {actual} when {expected} was requested")]
    ConversationMismatch {
        expected: ConversationId,
        actual: ConversationId,
    },

    #[error("Message {message_id} belongs to conversation {actual}, not {expected}")]
    ForeignMessage {
        message_id: i64,
        expected: ConversationId,
        actual: ConversationId,
    },
}
