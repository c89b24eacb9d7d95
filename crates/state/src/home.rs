use crate::ids::{ConversationId, MessageId};
use crate::message::Message;

pub const HOME_HEADING: &str = "Recent Chats";
pub const HOME_EMPTY_MESSAGE: &str = "No recent conversations found.";

/// Clickable entry of the home tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentChat {
    /// Key of the rendered row, taken from the message id.
    pub key: MessageId,
    pub label: String,
    /// Forwarded with the click so listeners can open that conversation.
    pub conversation_id: ConversationId,
}

/// Home tab content derived from the open conversation.
///
/// Only the latest bot message is surfaced, so there is at most one entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeSummary {
    recent: Option<RecentChat>,
}

impl HomeSummary {
    pub fn derive(messages: &[Message]) -> Self {
        let recent = messages
            .iter()
            .rev()
            .find(|message| message.is_from_bot())
            .map(|message| RecentChat {
                key: message.id.clone(),
                label: message.text().to_string(),
                conversation_id: message.conversation_id.clone(),
            });

        Self { recent }
    }

    pub fn heading(&self) -> &'static str {
        HOME_HEADING
    }

    pub fn recent(&self) -> Option<&RecentChat> {
        self.recent.as_ref()
    }

    pub fn entries(&self) -> &[RecentChat] {
        self.recent.as_slice()
    }

    /// Text shown in place of the list when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.recent.is_none().then_some(HOME_EMPTY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_latest_bot_message() {
        let messages = vec![
            Message::from_user("1", "c1", "u1", "hello"),
            Message::from_bot("2", "c1", "hi"),
            Message::from_bot("3", "c1", "bye"),
        ];

        let summary = HomeSummary::derive(&messages);

        assert_eq!(summary.entries().len(), 1);
        let recent = summary.recent().unwrap();
        assert_eq!(recent.label, "bye");
        assert_eq!(recent.key, MessageId::new("3"));
        assert_eq!(recent.conversation_id, ConversationId::new("c1"));
        assert_eq!(summary.empty_message(), None);
    }

    #[test]
    fn user_messages_after_the_bot_do_not_count() {
        let messages = vec![
            Message::from_bot("1", "c1", "welcome"),
            Message::from_user("2", "c1", "u1", "thanks"),
        ];

        let summary = HomeSummary::derive(&messages);

        assert_eq!(summary.recent().unwrap().label, "welcome");
    }

    #[test]
    fn empty_history_shows_empty_state() {
        let summary = HomeSummary::derive(&[]);

        assert!(summary.entries().is_empty());
        assert_eq!(summary.empty_message(), Some(HOME_EMPTY_MESSAGE));
        assert_eq!(summary.heading(), HOME_HEADING);
    }

    #[test]
    fn only_user_messages_show_empty_state() {
        let messages = vec![Message::from_user("1", "c1", "u1", "anyone?")];

        assert_eq!(
            HomeSummary::derive(&messages).empty_message(),
            Some(HOME_EMPTY_MESSAGE)
        );
    }

    #[test]
    fn bot_message_without_text_gets_empty_label() {
        let mut message = Message::from_bot("9", "c2", "");
        message.payload.text = None;

        let summary = HomeSummary::derive(&[message]);

        assert_eq!(summary.recent().unwrap().label, "");
    }
}
