use serde::{Deserialize, Serialize};

use crate::ids::{AuthorId, ConversationId, MessageId};

/// Message body as delivered by the channel. Only the text part is read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub text: Option<String>,
}

impl Payload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// One message of a conversation.
///
/// A message without an author was sent by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    #[serde(default)]
    pub author_id: Option<AuthorId>,
    #[serde(default)]
    pub payload: Payload,
}

impl Message {
    /// Creates a bot-authored text message.
    pub fn from_bot(
        id: impl Into<MessageId>,
        conversation_id: impl Into<ConversationId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            author_id: None,
            payload: Payload::text(text),
        }
    }

    /// Creates a text message written by `author_id`.
    pub fn from_user(
        id: impl Into<MessageId>,
        conversation_id: impl Into<ConversationId>,
        author_id: impl Into<AuthorId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            author_id: Some(author_id.into()),
            payload: Payload::text(text),
        }
    }

    pub fn is_from_bot(&self) -> bool {
        self.author_id.is_none()
    }

    /// Text payload, empty when the message carries none.
    pub fn text(&self) -> &str {
        self.payload.text.as_deref().unwrap_or_default()
    }
}

/// Conversation currently opened in the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: impl Into<ConversationId>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }
}

/// Messages of an optional conversation; an absent conversation reads as empty.
pub fn messages_of(conversation: Option<&Conversation>) -> &[Message] {
    conversation
        .map(|conversation| conversation.messages.as_slice())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_author_marks_bot_message() {
        let raw = r#"{"id":"2","conversation_id":"c1","author_id":null,"payload":{"text":"hi"}}"#;
        let message: Message = serde_json::from_str(raw).unwrap();

        assert!(message.is_from_bot());
        assert_eq!(message.text(), "hi");
    }

    #[test]
    fn missing_payload_reads_as_empty_text() {
        let raw = r#"{"id":"7","conversation_id":"c1","author_id":"u1"}"#;
        let message: Message = serde_json::from_str(raw).unwrap();

        assert!(!message.is_from_bot());
        assert_eq!(message.text(), "");
    }

    #[test]
    fn absent_conversation_has_no_messages() {
        assert!(messages_of(None).is_empty());

        let conversation =
            Conversation::new("c1").with_messages(vec![Message::from_bot("1", "c1", "hello")]);
        assert_eq!(messages_of(Some(&conversation)).len(), 1);
    }
}
