use crate::view::{DisplayMode, SharedViewState};

/// Top-level panel shown inside the widget layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Loading,
    ConversationList,
    BotInfo,
    Main,
}

/// Picks the panel for the current store state.
///
/// Loading takes precedence over every display flag, then the conversation list, then bot info.
pub fn select_panel(state: &SharedViewState) -> Panel {
    if !state.is_initialized {
        return Panel::Loading;
    }

    match state.display_mode() {
        DisplayMode::ConversationList => Panel::ConversationList,
        DisplayMode::BotInfo => Panel::BotInfo,
        DisplayMode::Conversation => Panel::Main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(initialized: bool, conversations: bool, bot_info: bool) -> SharedViewState {
        let mut state = SharedViewState::new("textbot");
        state.is_initialized = initialized;
        state.is_conversations_displayed = conversations;
        state.is_bot_info_displayed = bot_info;
        state
    }

    #[test]
    fn uninitialized_store_always_shows_loading() {
        for conversations in [false, true] {
            for bot_info in [false, true] {
                for emulator in [false, true] {
                    let mut state = state(false, conversations, bot_info);
                    state.is_emulator = emulator;
                    assert_eq!(select_panel(&state), Panel::Loading);
                }
            }
        }
    }

    #[test]
    fn conversation_list_wins_when_both_overlays_are_flagged() {
        assert_eq!(
            select_panel(&state(true, true, true)),
            Panel::ConversationList
        );
    }

    #[test]
    fn initialized_store_maps_each_overlay() {
        assert_eq!(
            select_panel(&state(true, true, false)),
            Panel::ConversationList
        );
        assert_eq!(select_panel(&state(true, false, true)), Panel::BotInfo);
        assert_eq!(select_panel(&state(true, false, false)), Panel::Main);
    }
}
