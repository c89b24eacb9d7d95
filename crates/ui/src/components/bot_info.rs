use gpui::*;
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    label::Label,
    v_flex,
};

use crate::store::WebchatStore;

#[derive(IntoElement)]
pub struct BotInfo {
    store: Entity<WebchatStore>,
}

impl BotInfo {
    pub fn new(store: Entity<WebchatStore>) -> Self {
        Self { store }
    }
}

impl RenderOnce for BotInfo {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let view = self.store.read(cx).view();
        let bot_name = view.bot_name.clone();
        let bot_id = view.bot_id.to_string();
        let store = self.store;

        v_flex()
            .id("webchat-bot-info")
            .flex_1()
            .min_h_0()
            .gap_2()
            .p_4()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child(bot_name),
            )
            .child(
                Label::new(bot_id)
                    .text_xs()
                    .text_color(theme.muted_foreground),
            )
            .child(
                div().pt_2().child(
                    Button::new("bot-info-back")
                        .small()
                        .primary()
                        .child("Back to conversation")
                        .on_click(move |_, _window, cx| {
                            store.update(cx, |store, cx| store.show_conversation(cx));
                        }),
                ),
            )
    }
}
