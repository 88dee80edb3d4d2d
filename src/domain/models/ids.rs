#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Identifier the backend assigns to a conversation. Route parameters arrive
/// as text and must go through `ConversationId::parse` before use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(i64);

impl ConversationId {
    pub fn new(id: i64) -> ConversationId {
        return ConversationId(id);
    }

    /// Backend ids start at 1, anything else is rejected.
    pub fn parse(text: &str) -> Option<ConversationId> {
        let id = text.trim().parse::<i64>().ok()?;
        if id < 1 {
            return None;
        }

        return Some(ConversationId(id));
    }

    pub fn value(&self) -> i64 {
        return self.0;
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
