use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
};

/// Emitted when the user sends the composer content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerSubmit {
    pub text: String,
}

pub struct Composer {
    input_state: Entity<InputState>,
}

impl EventEmitter<ComposerSubmit> for Composer {}

impl Composer {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Reply to the bot...")
                .clean_on_escape()
        });

        cx.subscribe_in(
            &input_state,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { secondary: false } = event {
                    this.handle_submit(window, cx);
                }
            },
        )
        .detach();

        Self { input_state }
    }

    fn handle_submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.input_state.read(cx).value().trim().to_string();
        if text.is_empty() {
            return;
        }

        cx.emit(ComposerSubmit { text });
        self.input_state.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
    }
}

impl Render for Composer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        h_flex()
            .id("webchat-composer")
            .w_full()
            .gap_2()
            .p_3()
            .border_t_1()
            .border_color(theme.border)
            .child(div().flex_1().min_w_0().child(Input::new(&self.input_state)))
            .child(
                Button::new("composer-send")
                    .small()
                    .primary()
                    .icon(IconName::ArrowUp)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.handle_submit(window, cx);
                    })),
            )
    }
}
