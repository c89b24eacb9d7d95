use gpui::*;
use webchat_state::{
    Conversation, ConversationId, Message, MessageId, SharedViewState, SideTransition,
};

/// Author id used for messages typed into the local composer.
pub const LOCAL_AUTHOR_ID: &str = "local-user";

/// Shared widget store. Collaborators mutate it; the container only reads it.
pub struct WebchatStore {
    view: SharedViewState,
    current_conversation: Option<Conversation>,
    next_local_message: u64,
}

impl WebchatStore {
    pub fn new(view: SharedViewState) -> Self {
        Self {
            view,
            current_conversation: None,
            next_local_message: 1,
        }
    }

    pub fn with_conversation(mut self, conversation: Conversation) -> Self {
        self.current_conversation = Some(conversation);
        self
    }

    pub fn view(&self) -> &SharedViewState {
        &self.view
    }

    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current_conversation.as_ref()
    }

    pub fn mark_initialized(&mut self, cx: &mut Context<Self>) {
        if self.view.is_initialized {
            return;
        }

        self.view.is_initialized = true;
        tracing::info!(bot_id = %self.view.bot_id, "webchat store initialized");
        cx.notify();
    }

    pub fn toggle_conversations(&mut self, cx: &mut Context<Self>) {
        self.view.toggle_conversations();
        cx.notify();
    }

    pub fn toggle_bot_info(&mut self, cx: &mut Context<Self>) {
        self.view.toggle_bot_info();
        cx.notify();
    }

    pub fn show_conversation(&mut self, cx: &mut Context<Self>) {
        self.view.show_conversation();
        cx.notify();
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool, cx: &mut Context<Self>) {
        self.view.is_fullscreen = fullscreen;
        cx.notify();
    }

    pub fn set_side_transition(&mut self, transition: SideTransition, cx: &mut Context<Self>) {
        self.view.side_transition = transition;
        cx.notify();
    }

    pub fn set_layout_width(&mut self, width: f32, cx: &mut Context<Self>) {
        self.view.dimensions.layout = width;
        cx.notify();
    }

    pub fn append_local_message(&mut self, text: String, cx: &mut Context<Self>) {
        if let Some(message_id) = self.push_local_message(text) {
            tracing::debug!(%message_id, "appended local message");
            cx.notify();
        }
    }

    /// Appends a message authored by the local user to the open conversation.
    ///
    /// Returns `None` when no conversation is open or the text is blank.
    fn push_local_message(&mut self, text: String) -> Option<MessageId> {
        if text.trim().is_empty() {
            return None;
        }
        let conversation = self.current_conversation.as_mut()?;

        let message_id = MessageId::new(format!("local-{}", self.next_local_message));
        self.next_local_message += 1;
        conversation.messages.push(Message::from_user(
            message_id.clone(),
            conversation.id.clone(),
            LOCAL_AUTHOR_ID,
            text,
        ));
        Some(message_id)
    }

    /// Whether `conversation_id` is the conversation currently open.
    pub fn is_current_conversation(&self, conversation_id: &ConversationId) -> bool {
        self.current_conversation
            .as_ref()
            .is_some_and(|conversation| &conversation.id == conversation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webchat_state::HomeSummary;

    fn store() -> WebchatStore {
        WebchatStore::new(SharedViewState::new("textbot")).with_conversation(
            Conversation::new("c1").with_messages(vec![Message::from_bot("1", "c1", "welcome")]),
        )
    }

    #[::core::prelude::v1::test]
    fn local_messages_are_not_bot_messages() {
        let mut store = store();

        let first = store.push_local_message("hello".to_string()).unwrap();
        let second = store.push_local_message("again".to_string()).unwrap();

        assert_ne!(first, second);
        let conversation = store.current_conversation().unwrap();
        assert_eq!(conversation.messages.len(), 3);
        let summary = HomeSummary::derive(&conversation.messages);
        assert_eq!(summary.recent().unwrap().label, "welcome");
    }

    #[::core::prelude::v1::test]
    fn blank_or_orphan_messages_are_dropped() {
        let mut store = store();
        assert_eq!(store.push_local_message("   ".to_string()), None);

        let mut empty = WebchatStore::new(SharedViewState::new("textbot"));
        assert_eq!(empty.push_local_message("hello".to_string()), None);
    }

    #[::core::prelude::v1::test]
    fn recognises_the_open_conversation() {
        let store = store();

        assert!(store.is_current_conversation(&ConversationId::new("c1")));
        assert!(!store.is_current_conversation(&ConversationId::new("c2")));
    }
}
