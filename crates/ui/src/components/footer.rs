use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label};

/// "Powered by" strip at the bottom of the widget.
#[derive(IntoElement)]
pub struct Footer {
    label: SharedString,
}

impl Footer {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        h_flex()
            .id("webchat-footer")
            .w_full()
            .flex_shrink_0()
            .justify_center()
            .py_1()
            .border_t_1()
            .border_color(theme.border)
            .child(
                Label::new(self.label)
                    .text_xs()
                    .text_color(theme.muted_foreground),
            )
    }
}
