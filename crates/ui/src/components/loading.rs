use gpui::*;
use gpui_component::{ActiveTheme, label::Label, v_flex};

#[derive(IntoElement, Default)]
pub struct LoadingPanel;

impl RenderOnce for LoadingPanel {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .id("webchat-loading")
            .flex_1()
            .min_h_0()
            .items_center()
            .justify_center()
            .child(
                Label::new("Loading…")
                    .text_sm()
                    .text_color(theme.foreground.opacity(0.55)),
            )
    }
}
