use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme, label::Label, v_flex};
use webchat_state::Message;

/// Plain text thread of the open conversation.
#[derive(IntoElement)]
pub struct MessageList {
    messages: Vec<Message>,
    rtl: bool,
}

impl MessageList {
    pub fn new(messages: &[Message]) -> Self {
        Self {
            messages: messages.to_vec(),
            rtl: false,
        }
    }

    /// Mirrors the thread: bot messages on the right, user messages on the left.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

impl RenderOnce for MessageList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        if self.messages.is_empty() {
            return v_flex()
                .id("webchat-message-list")
                .flex_1()
                .min_h_0()
                .items_center()
                .justify_center()
                .child(
                    Label::new("No messages yet")
                        .text_sm()
                        .text_color(theme.foreground.opacity(0.55)),
                );
        }

        let rtl = self.rtl;
        let rows = self.messages.into_iter().map(|message| {
            let from_bot = message.is_from_bot();
            let leading = from_bot != rtl;
            div()
                .id(SharedString::from(format!("message-{}", message.id)))
                .w_full()
                .flex()
                .when(leading, |row| row.justify_start())
                .when(!leading, |row| row.justify_end())
                .child(
                    div()
                        .max_w(relative(0.8))
                        .px_3()
                        .py_2()
                        .rounded_lg()
                        .text_sm()
                        .when(from_bot, |bubble| {
                            bubble.bg(theme.muted).text_color(theme.foreground)
                        })
                        .when(!from_bot, |bubble| {
                            bubble
                                .bg(theme.primary)
                                .text_color(theme.primary_foreground)
                        })
                        .child(message.text().to_string()),
                )
        });

        v_flex()
            .id("webchat-message-list")
            .flex_1()
            .min_h_0()
            .gap_2()
            .p_3()
            .overflow_y_scroll()
            .children(rows)
    }
}
