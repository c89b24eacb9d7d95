use gpui::*;
use gpui_component::{ActiveTheme, label::Label, list::ListItem, v_flex};

use crate::store::WebchatStore;

/// Conversations known to the widget. The store only keeps the open one.
#[derive(IntoElement)]
pub struct ConversationList {
    store: Entity<WebchatStore>,
}

impl ConversationList {
    pub fn new(store: Entity<WebchatStore>) -> Self {
        Self { store }
    }
}

impl RenderOnce for ConversationList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let current = self
            .store
            .read(cx)
            .current_conversation()
            .map(|conversation| (conversation.id.to_string(), conversation.messages.len()));

        let Some((conversation_id, message_count)) = current else {
            return v_flex()
                .id("webchat-conversation-list")
                .flex_1()
                .items_center()
                .justify_center()
                .px_4()
                .child(
                    Label::new("No conversations yet")
                        .text_sm()
                        .text_color(theme.foreground.opacity(0.55)),
                );
        };

        let store = self.store;
        v_flex()
            .id("webchat-conversation-list")
            .flex_1()
            .min_h_0()
            .p_2()
            .child(
                ListItem::new("conversation-current")
                    .w_full()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .selected(true)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        store.update(cx, |store, cx| store.show_conversation(cx));
                    })
                    .child(
                        v_flex()
                            .w_full()
                            .child(Label::new(format!("Conversation {conversation_id}")).text_sm())
                            .child(
                                Label::new(format!("{message_count} messages"))
                                    .text_xs()
                                    .text_color(theme.muted_foreground),
                            ),
                    ),
            )
    }
}
