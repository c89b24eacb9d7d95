use std::collections::BTreeSet;

use crate::ids::{BotId, ConversationId};

/// Bot that gets the home tab when no allow-list is configured.
pub const DEFAULT_TAB_BOT_ID: &str = "textbot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Chat,
    Home,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Home => "Home",
        }
    }
}

/// User interaction that moves the tab controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    ClickTab(Tab),
    /// Click on the recent-chat entry of the home tab.
    ///
    /// The conversation id is not interpreted here; it is forwarded to whoever listens.
    ClickRecentChat(ConversationId),
}

/// Tab selection local to one mounted container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Applies one action and returns the resulting active tab.
    pub fn apply(&mut self, action: &TabAction) -> Tab {
        let next = match action {
            TabAction::ClickTab(tab) => *tab,
            TabAction::ClickRecentChat(_) => Tab::Chat,
        };

        if next != self.active {
            tracing::debug!(from = ?self.active, to = ?next, "tab changed");
        }
        self.active = next;
        next
    }
}

/// Bots for which the chat/home tab bar is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabAllowList {
    bot_ids: BTreeSet<BotId>,
}

impl TabAllowList {
    pub fn new<I, B>(bot_ids: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BotId>,
    {
        Self {
            bot_ids: bot_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            bot_ids: BTreeSet::new(),
        }
    }

    pub fn is_tab_enabled_for(&self, bot_id: &BotId) -> bool {
        self.bot_ids.contains(bot_id)
    }

    pub fn len(&self) -> usize {
        self.bot_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bot_ids.is_empty()
    }
}

impl Default for TabAllowList {
    fn default() -> Self {
        Self::new([DEFAULT_TAB_BOT_ID])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_chat() {
        assert_eq!(TabState::new().active(), Tab::Chat);
    }

    #[test]
    fn tab_clicks_switch_between_home_and_chat() {
        let mut tabs = TabState::new();

        assert_eq!(tabs.apply(&TabAction::ClickTab(Tab::Home)), Tab::Home);
        assert_eq!(tabs.apply(&TabAction::ClickTab(Tab::Home)), Tab::Home);
        assert_eq!(tabs.apply(&TabAction::ClickTab(Tab::Chat)), Tab::Chat);
    }

    #[test]
    fn recent_chat_click_forces_chat_from_any_tab() {
        let mut tabs = TabState::new();
        tabs.apply(&TabAction::ClickTab(Tab::Home));

        let action = TabAction::ClickRecentChat(ConversationId::new("c1"));
        assert_eq!(tabs.apply(&action), Tab::Chat);
        assert_eq!(tabs.apply(&action), Tab::Chat);
    }

    #[test]
    fn allow_list_matches_exact_bot_ids() {
        let allow_list = TabAllowList::default();

        assert!(allow_list.is_tab_enabled_for(&BotId::new("textbot")));
        assert!(!allow_list.is_tab_enabled_for(&BotId::new("TextBot")));
        assert!(!TabAllowList::empty().is_tab_enabled_for(&BotId::new("textbot")));
    }
}
