use gpui::*;
use gpui_component::{Root, ThemeRegistry};
use webchat_state::{Conversation, Message, SharedViewState, SlotName};

use webchat::app::{
    Quit, ToggleBotInfo, ToggleConversations, ToggleFullscreen, ToggleThemeMode, WebchatShell,
    default_themes_path,
};
use webchat::settings::SettingsStore;
use webchat::{ExtensionSlots, WebchatStore};

const DEMO_BOT_ID: &str = "textbot";
const DEMO_CONVERSATION_ID: &str = "demo-conversation";

fn demo_store() -> WebchatStore {
    let mut view = SharedViewState::new(DEMO_BOT_ID);
    view.bot_name = "Text Bot".to_string();

    let conversation = Conversation::new(DEMO_CONVERSATION_ID).with_messages(vec![
        Message::from_bot("1", DEMO_CONVERSATION_ID, "Hi! How can I help you today?"),
        Message::from_user("2", DEMO_CONVERSATION_ID, "visitor", "What are your opening hours?"),
        Message::from_bot("3", DEMO_CONVERSATION_ID, "We are open 9am to 5pm, Monday to Friday."),
    ]);

    WebchatStore::new(view).with_conversation(conversation)
}

/// Application entry point.
///
/// Bootstraps the GPUI application with:
/// 1. Asset loading via gpui-component-assets
/// 2. gpui-component initialization (required for Root and themes)
/// 3. Theme loading/watching from ./themes directory (non-fatal if missing)
/// 4. Global action handlers and key bindings
/// 5. Window creation with Root wrapper for gpui-component composition
fn main() {
    tracing_subscriber::fmt::init();

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx| {
        gpui_component::init(cx);

        if let Err(err) = ThemeRegistry::watch_dir(default_themes_path(), cx, |cx| {
            let settings_store = SettingsStore::load();
            settings_store.settings().apply_theme(None, cx);
            tracing::info!("Theme directory watch initialized");
        }) {
            tracing::warn!(
                "Failed to watch themes directory: {}. Using default themes.",
                err
            );
            let settings_store = SettingsStore::load();
            settings_store.settings().apply_theme(None, cx);
        }

        cx.on_action(|_: &Quit, cx| {
            cx.quit();
        });

        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-l", ToggleConversations, None),
            KeyBinding::new("cmd-i", ToggleBotInfo, None),
            KeyBinding::new("cmd-f", ToggleFullscreen, None),
            KeyBinding::new("cmd-t", ToggleThemeMode, None),
        ]);

        cx.spawn(async move |cx| {
            cx.update(|cx| {
                let options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                        None,
                        size(px(520.), px(720.)),
                        cx,
                    ))),
                    ..Default::default()
                };

                let opened = cx.open_window(options, |window, cx| {
                    let store = cx.new(|_| demo_store());
                    let slots = ExtensionSlots::new().fill(SlotName::BelowConversation, |_, _| {
                        div().h(px(4.)).into_any_element()
                    });

                    let shell = cx.new(|cx| {
                        WebchatShell::new(store, slots, window, cx)
                    });

                    cx.new(|cx| Root::new(shell, window, cx))
                });

                match opened {
                    Ok(_) => cx.activate(true),
                    Err(error) => {
                        tracing::error!("failed to open webchat window: {error}");
                        cx.quit();
                    }
                }
            })
        })
        .detach();
    });
}
