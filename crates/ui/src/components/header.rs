use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
};

use crate::store::WebchatStore;

/// Widget title bar with the overlay toggles.
#[derive(IntoElement)]
pub struct Header {
    store: Entity<WebchatStore>,
}

impl Header {
    pub fn new(store: Entity<WebchatStore>) -> Self {
        Self { store }
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let view = self.store.read(cx).view();
        let title = if view.bot_name.trim().is_empty() {
            view.bot_id.to_string()
        } else {
            view.bot_name.clone()
        };
        let conversations_open = view.is_conversations_displayed;
        let bot_info_open = view.is_bot_info_displayed;
        let conversations_store = self.store.clone();
        let bot_info_store = self.store;

        h_flex()
            .id("webchat-header")
            .w_full()
            .flex_shrink_0()
            .items_center()
            .justify_between()
            .gap_2()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .truncate()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child(title),
            )
            .child(
                h_flex()
                    .gap_1()
                    .child(
                        Button::new("header-conversations")
                            .small()
                            .icon(IconName::PanelLeftOpen)
                            .when(conversations_open, |button| button.primary())
                            .when(!conversations_open, |button| button.ghost())
                            .on_click(move |_, _window, cx| {
                                conversations_store
                                    .update(cx, |store, cx| store.toggle_conversations(cx));
                            }),
                    )
                    .child(
                        Button::new("header-bot-info")
                            .small()
                            .icon(IconName::CircleUser)
                            .when(bot_info_open, |button| button.primary())
                            .when(!bot_info_open, |button| button.ghost())
                            .on_click(move |_, _window, cx| {
                                bot_info_store.update(cx, |store, cx| store.toggle_bot_info(cx));
                            }),
                    ),
            )
    }
}
