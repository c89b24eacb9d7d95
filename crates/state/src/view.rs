use crate::ids::BotId;

/// Default width of the widget layout box, in pixels.
pub const DEFAULT_LAYOUT_WIDTH: f32 = 400.0;

/// Animation played when the widget slides in or out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SideTransition {
    #[default]
    None,
    FadeIn,
    FadeOut,
}

impl SideTransition {
    /// Element id of the animation that plays this transition.
    pub fn animation_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FadeIn => "fadeIn",
            Self::FadeOut => "fadeOut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub layout: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT_WIDTH,
        }
    }
}

/// Which of the store-driven overlays is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Conversation,
    ConversationList,
    BotInfo,
}

impl DisplayMode {
    /// Folds the two display flags into one mode.
    ///
    /// The conversation list wins when both flags are set.
    pub fn from_flags(conversations_displayed: bool, bot_info_displayed: bool) -> Self {
        if conversations_displayed {
            Self::ConversationList
        } else if bot_info_displayed {
            Self::BotInfo
        } else {
            Self::Conversation
        }
    }
}

/// Flags of the shared widget store read by the container on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedViewState {
    pub is_initialized: bool,
    pub is_conversations_displayed: bool,
    pub is_bot_info_displayed: bool,
    pub is_emulator: bool,
    pub is_fullscreen: bool,
    pub rtl: bool,
    pub is_powered_by_displayed: bool,
    pub side_transition: SideTransition,
    pub dimensions: Dimensions,
    pub bot_id: BotId,
    pub bot_name: String,
}

impl SharedViewState {
    pub fn new(bot_id: impl Into<BotId>) -> Self {
        Self {
            is_initialized: false,
            is_conversations_displayed: false,
            is_bot_info_displayed: false,
            is_emulator: false,
            is_fullscreen: false,
            rtl: false,
            is_powered_by_displayed: true,
            side_transition: SideTransition::None,
            dimensions: Dimensions::default(),
            bot_id: bot_id.into(),
            bot_name: String::new(),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_flags(self.is_conversations_displayed, self.is_bot_info_displayed)
    }

    /// Shows or hides the conversation list. Showing it hides bot info.
    pub fn toggle_conversations(&mut self) {
        self.is_conversations_displayed = !self.is_conversations_displayed;
        if self.is_conversations_displayed {
            self.is_bot_info_displayed = false;
        }
    }

    /// Shows or hides bot info. Showing it hides the conversation list.
    pub fn toggle_bot_info(&mut self) {
        self.is_bot_info_displayed = !self.is_bot_info_displayed;
        if self.is_bot_info_displayed {
            self.is_conversations_displayed = false;
        }
    }

    /// Returns to the message thread, closing both overlays.
    pub fn show_conversation(&mut self) {
        self.is_conversations_displayed = false;
        self.is_bot_info_displayed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_list_wins_over_bot_info() {
        assert_eq!(
            DisplayMode::from_flags(true, true),
            DisplayMode::ConversationList
        );
        assert_eq!(DisplayMode::from_flags(false, true), DisplayMode::BotInfo);
        assert_eq!(
            DisplayMode::from_flags(false, false),
            DisplayMode::Conversation
        );
    }

    #[test]
    fn toggles_keep_overlays_exclusive() {
        let mut state = SharedViewState::new("textbot");

        state.toggle_conversations();
        assert_eq!(state.display_mode(), DisplayMode::ConversationList);

        state.toggle_bot_info();
        assert!(state.is_bot_info_displayed);
        assert!(!state.is_conversations_displayed);

        state.toggle_conversations();
        assert!(state.is_conversations_displayed);
        assert!(!state.is_bot_info_displayed);

        state.toggle_conversations();
        assert_eq!(state.display_mode(), DisplayMode::Conversation);
    }

    #[test]
    fn show_conversation_clears_both_flags() {
        let mut state = SharedViewState::new("textbot");
        state.is_conversations_displayed = true;
        state.is_bot_info_displayed = true;

        state.show_conversation();

        assert_eq!(state.display_mode(), DisplayMode::Conversation);
    }

    #[test]
    fn each_transition_has_its_own_animation() {
        assert_eq!(SideTransition::default(), SideTransition::None);
        assert_ne!(
            SideTransition::FadeIn.animation_name(),
            SideTransition::FadeOut.animation_name()
        );
    }
}
