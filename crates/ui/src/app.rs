use std::path::PathBuf;
use std::time::Duration;

use gpui::*;
use gpui_component::{ActiveTheme, ThemeMode};
use webchat_state::SideTransition;

use crate::container::{Container, RecentChatSelected};
use crate::settings::{SettingsChanged, SettingsState};
use crate::slots::ExtensionSlots;
use crate::store::WebchatStore;

/// Directory watched for theme files.
pub fn default_themes_path() -> PathBuf {
    PathBuf::from("./themes")
}

/// Delay before the demo store reports itself initialized.
pub const STORE_INIT_DELAY_MS: u64 = 600;

gpui::actions!(
    webchat,
    [
        ToggleConversations,
        ToggleBotInfo,
        ToggleFullscreen,
        ToggleThemeMode,
        Quit,
    ]
);

/// Window shell hosting the widget container.
pub struct WebchatShell {
    store: Entity<WebchatStore>,
    settings_state: Entity<SettingsState>,
    container: Entity<Container>,
}

impl WebchatShell {
    pub fn new(
        store: Entity<WebchatStore>,
        slots: ExtensionSlots,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let settings_state = SettingsState::new(cx);
        let layout_width = settings_state.read(cx).settings().layout_width;
        store.update(cx, |store, cx| store.set_layout_width(layout_width, cx));

        let container = cx.new(|cx| {
            Container::new(store.clone(), settings_state.clone(), slots, window, cx)
        });

        cx.subscribe(&container, |this, _, event: &RecentChatSelected, cx| {
            this.handle_recent_chat_selected(event, cx);
        })
        .detach();

        cx.subscribe(&settings_state, |this, _, event: &SettingsChanged, cx| {
            let layout_width = event.settings.layout_width;
            this.store
                .update(cx, |store, cx| store.set_layout_width(layout_width, cx));
        })
        .detach();

        let init_store = store.clone();
        cx.spawn(async move |_this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(STORE_INIT_DELAY_MS))
                .await;

            let _ = init_store.update(cx, |store, cx| {
                store.set_side_transition(SideTransition::FadeIn, cx);
                store.mark_initialized(cx);
            });
        })
        .detach();

        Self {
            store,
            settings_state,
            container,
        }
    }

    fn handle_recent_chat_selected(&mut self, event: &RecentChatSelected, cx: &mut Context<Self>) {
        let is_open = self
            .store
            .read(cx)
            .is_current_conversation(&event.conversation_id);
        if !is_open {
            tracing::warn!(
                conversation_id = %event.conversation_id,
                "recent chat points at a conversation that is not loaded"
            );
        }

        self.store.update(cx, |store, cx| store.show_conversation(cx));
    }

    fn toggle_conversations(&mut self, _: &ToggleConversations, _: &mut Window, cx: &mut Context<Self>) {
        self.store
            .update(cx, |store, cx| store.toggle_conversations(cx));
    }

    fn toggle_bot_info(&mut self, _: &ToggleBotInfo, _: &mut Window, cx: &mut Context<Self>) {
        self.store.update(cx, |store, cx| store.toggle_bot_info(cx));
    }

    fn toggle_fullscreen(&mut self, _: &ToggleFullscreen, _: &mut Window, cx: &mut Context<Self>) {
        self.store.update(cx, |store, cx| {
            let fullscreen = !store.view().is_fullscreen;
            store.set_fullscreen(fullscreen, cx);
        });
    }

    fn toggle_theme_mode(&mut self, _: &ToggleThemeMode, window: &mut Window, cx: &mut Context<Self>) {
        let mut settings = (*self.settings_state.read(cx).settings()).clone();
        settings.theme_mode = if settings.theme_mode.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        settings.apply_theme(Some(window), cx);

        let result = self
            .settings_state
            .update(cx, |state, cx| state.update_settings(settings, cx));
        if let Err(error) = result {
            tracing::error!("failed to save theme mode: {error}");
        }
    }
}

impl Render for WebchatShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id("webchat-shell")
            .key_context("WebchatShell")
            .on_action(cx.listener(Self::toggle_conversations))
            .on_action(cx.listener(Self::toggle_bot_info))
            .on_action(cx.listener(Self::toggle_fullscreen))
            .on_action(cx.listener(Self::toggle_theme_mode))
            .size_full()
            .relative()
            .p_4()
            .bg(theme.muted)
            .child(self.container.clone())
    }
}
