//! Chat transcript message types.

use crate::intent::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Assistant,
}

impl MessageRole {
    /// Wire name used when sending history to the completion service.
    pub fn wire_name(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single message in the chat panel transcript.
///
/// Assistant messages that triggered a UI action keep the parsed intent
/// attached so the panel can show the action feedback next to the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id (UUID format)
    pub id: String,
    /// Author of the message
    pub role: MessageRole,
    /// Message text
    pub text: String,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
    /// Intent the assistant attached to this message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text, None)
    }

    /// Creates an assistant message, optionally carrying an intent.
    pub fn from_assistant(text: impl Into<String>, intent: Option<Intent>) -> Self {
        Self::new(MessageRole::Assistant, text, intent)
    }

    fn new(role: MessageRole, text: impl Into<String>, intent: Option<Intent>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_unique_ids() {
        let a = ChatMessage::from_user("olá");
        let b = ChatMessage::from_user("olá");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn wire_names_match_the_completion_api() {
        assert_eq!(MessageRole::User.wire_name(), "user");
        assert_eq!(MessageRole::Assistant.wire_name(), "assistant");
    }
}
