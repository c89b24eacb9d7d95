use std::time::Duration;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};
use webchat_state::{
    Body, BodyModifiers, ContainerLayout, ConversationId, HomeSummary, MainBody, Section,
    SideTransition, SlotName, Tab, TabAction, TabAllowList, TabBar, TabState, messages_of,
};

use crate::components::{
    BotInfo, Composer, ComposerSubmit, ConversationList, Footer, Header, LoadingPanel, MessageList,
};
use crate::settings::{SettingsChanged, SettingsState, WebchatSettings};
use crate::slots::ExtensionSlots;
use crate::store::WebchatStore;

pub const SIDE_TRANSITION_MS: u64 = 300;

/// Emitted when the recent-chat entry of the home tab is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecentChatSelected {
    pub conversation_id: ConversationId,
}

/// Root view of the widget: picks the panel and wraps it in chrome.
pub struct Container {
    store: Entity<WebchatStore>,
    tabs: TabState,
    allow_list: TabAllowList,
    powered_by_label: SharedString,
    slots: ExtensionSlots,
    composer: Entity<Composer>,
}

impl EventEmitter<RecentChatSelected> for Container {}

impl Container {
    pub fn new(
        store: Entity<WebchatStore>,
        settings_state: Entity<SettingsState>,
        slots: ExtensionSlots,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let composer = cx.new(|cx| Composer::new(window, cx));
        let settings = settings_state.read(cx).settings();

        cx.observe(&store, |_, _, cx| cx.notify()).detach();

        cx.subscribe(&composer, |this, _, event: &ComposerSubmit, cx| {
            let text = event.text.clone();
            this.store
                .update(cx, |store, cx| store.append_local_message(text, cx));
        })
        .detach();

        cx.subscribe(&settings_state, |this, _, event: &SettingsChanged, cx| {
            this.apply_settings(&event.settings);
            cx.notify();
        })
        .detach();

        let mut container = Self {
            store,
            tabs: TabState::new(),
            allow_list: TabAllowList::empty(),
            powered_by_label: SharedString::default(),
            slots,
            composer,
        };
        container.apply_settings(&settings);
        container
    }

    fn apply_settings(&mut self, settings: &WebchatSettings) {
        self.allow_list = settings.allow_list();
        self.powered_by_label = settings.powered_by_label.clone().into();
        tracing::debug!(allowed_bots = self.allow_list.len(), "applied container settings");
    }

    fn handle_tab_click(&mut self, tab: Tab, cx: &mut Context<Self>) {
        self.tabs.apply(&TabAction::ClickTab(tab));
        cx.notify();
    }

    fn handle_recent_chat_click(&mut self, conversation_id: ConversationId, cx: &mut Context<Self>) {
        let event = select_recent_chat(&mut self.tabs, conversation_id);
        cx.emit(event);
        cx.notify();
    }

    fn compose_layout(&self, cx: &App) -> ContainerLayout {
        let store = self.store.read(cx);
        ContainerLayout::compose(
            store.view(),
            store.current_conversation(),
            &self.tabs,
            &self.allow_list,
        )
    }
}

impl Render for Container {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.compose_layout(cx);
        let theme = cx.theme();
        let layout_box = &layout.layout_box;

        let mut chrome = v_flex()
            .id("webchat-layout")
            .relative()
            .min_h_0()
            .overflow_hidden()
            .bg(theme.background)
            .border_1()
            .border_color(theme.border)
            .when(layout_box.fullscreen, |el| el.size_full())
            .when(!layout_box.fullscreen, |el| {
                el.h_full().w(px(layout_box.width)).rounded_lg()
            });

        for section in layout.sections() {
            let element = self.render_section(section, &layout, window, cx);
            chrome = chrome.child(element);
        }

        let before_container = self
            .slots
            .render(SlotName::BeforeContainer, None, window, cx);

        v_flex()
            .id("webchat-root")
            .size_full()
            .items_end()
            .child(before_container)
            .child(with_side_transition(chrome, layout_box.transition))
    }
}

impl Container {
    fn render_section(
        &mut self,
        section: Section,
        layout: &ContainerLayout,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match section {
            Section::Header => Header::new(self.store.clone()).into_any_element(),
            Section::Body => self.render_body(&layout.body, window, cx),
            Section::TabBar => match layout.tab_bar {
                Some(tab_bar) => self.render_tab_bar(tab_bar, cx),
                None => Empty.into_any_element(),
            },
            Section::Slot(name) => self.slots.render(name, None, window, cx),
            Section::Footer => Footer::new(self.powered_by_label.clone()).into_any_element(),
        }
    }

    fn render_body(&mut self, body: &Body, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        match body {
            Body::Loading => LoadingPanel.into_any_element(),
            Body::ConversationList => ConversationList::new(self.store.clone()).into_any_element(),
            Body::BotInfo => BotInfo::new(self.store.clone()).into_any_element(),
            Body::Main { content, modifiers } => {
                let content = match content {
                    MainBody::Chat => self.render_chat(*modifiers, window, cx),
                    MainBody::Home(summary) => self.render_home_tab(summary, modifiers.rtl, cx),
                };
                let theme = cx.theme();

                v_flex()
                    .id("webchat-msg-list-container")
                    .flex_1()
                    .min_h_0()
                    .when(modifiers.emulator, |el| {
                        el.border_2().border_color(theme.primary)
                    })
                    .child(content)
                    .into_any_element()
            }
        }
    }

    fn render_chat(
        &mut self,
        modifiers: BodyModifiers,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let messages = MessageList::new(messages_of(self.store.read(cx).current_conversation()))
            .rtl(modifiers.rtl);
        let composer = self.slots.render(
            SlotName::Composer,
            Some(self.composer.clone().into_any_element()),
            window,
            cx,
        );

        v_flex()
            .size_full()
            .min_h_0()
            .child(messages)
            .child(
                div()
                    .id("webchat-keyboard")
                    .w_full()
                    .flex_shrink_0()
                    .child(composer),
            )
            .into_any_element()
    }

    fn render_home_tab(
        &mut self,
        summary: &HomeSummary,
        rtl: bool,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let theme = cx.theme();

        let recent_chats = match summary.recent() {
            Some(recent) => {
                let conversation_id = recent.conversation_id.clone();
                v_flex()
                    .id("webchat-recent-chats")
                    .w_full()
                    .child(
                        Button::new(SharedString::from(format!("recent-chat-{}", recent.key)))
                            .ghost()
                            .small()
                            .w_full()
                            .child(format!("Bot: {}", recent.label))
                            .on_click(cx.listener(move |this, _, _window, cx| {
                                this.handle_recent_chat_click(conversation_id.clone(), cx);
                            })),
                    )
                    .into_any_element()
            }
            None => summary
                .empty_message()
                .map(|message| {
                    Label::new(message)
                        .text_sm()
                        .text_color(theme.foreground.opacity(0.55))
                        .into_any_element()
                })
                .unwrap_or_else(|| Empty.into_any_element()),
        };

        v_flex()
            .id("webchat-home-section")
            .flex_1()
            .min_h_0()
            .gap_2()
            .p_4()
            .when(rtl, |el| el.items_end())
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child(summary.heading()),
            )
            .child(recent_chats)
            .into_any_element()
    }

    fn render_tab_bar(&mut self, tab_bar: TabBar, cx: &mut Context<Self>) -> AnyElement {
        let buttons = tab_bar.buttons().map(|button| {
            let tab = button.tab;
            let id = match tab {
                Tab::Home => "tab-home",
                Tab::Chat => "tab-chat",
            };

            Button::new(id)
                .small()
                .when(button.active, |el| el.primary())
                .when(!button.active, |el| el.ghost())
                .child(button.label())
                .on_click(cx.listener(move |this, _, _window, cx| {
                    this.handle_tab_click(tab, cx);
                }))
        });

        h_flex()
            .id("webchat-tab-buttons")
            .w_full()
            .flex_shrink_0()
            .justify_center()
            .gap_2()
            .p_2()
            .children(buttons)
            .into_any_element()
    }
}

/// Switches the tab state back to chat and builds the event forwarded to the host.
fn select_recent_chat(tabs: &mut TabState, conversation_id: ConversationId) -> RecentChatSelected {
    tabs.apply(&TabAction::ClickRecentChat(conversation_id.clone()));
    RecentChatSelected { conversation_id }
}

fn with_side_transition(element: Stateful<Div>, transition: SideTransition) -> AnyElement {
    let animation = Animation::new(Duration::from_millis(SIDE_TRANSITION_MS)).with_easing(ease_in_out);

    match transition {
        SideTransition::None => element.into_any_element(),
        SideTransition::FadeIn => element
            .with_animation(
                transition.animation_name(),
                animation,
                |element, delta| element.opacity(delta),
            )
            .into_any_element(),
        SideTransition::FadeOut => element
            .with_animation(
                transition.animation_name(),
                animation,
                |element, delta| element.opacity(1.0 - delta),
            )
            .into_any_element(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[::core::prelude::v1::test]
    fn recent_chat_click_returns_to_chat_with_same_id() {
        let mut tabs = TabState::new();
        tabs.apply(&TabAction::ClickTab(Tab::Home));
        let conversation_id = ConversationId::new("c1");

        let event = select_recent_chat(&mut tabs, conversation_id.clone());

        assert_eq!(event.conversation_id, conversation_id);
        assert_eq!(tabs.active(), Tab::Chat);
    }

    #[::core::prelude::v1::test]
    fn recent_chat_click_from_chat_stays_on_chat() {
        let mut tabs = TabState::new();

        let event = select_recent_chat(&mut tabs, ConversationId::new("other"));

        assert_eq!(event.conversation_id.as_str(), "other");
        assert_eq!(tabs.active(), Tab::Chat);
    }
}
