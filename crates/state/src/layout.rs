use crate::home::HomeSummary;
use crate::message::{Conversation, messages_of};
use crate::panel::{Panel, select_panel};
use crate::tabs::{Tab, TabAllowList, TabState};
use crate::view::{SharedViewState, SideTransition};

/// Named insertion points collaborators may fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotName {
    BeforeContainer,
    BelowConversation,
    Composer,
}

impl SlotName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeContainer => "before_container",
            Self::BelowConversation => "below_conversation",
            Self::Composer => "composer",
        }
    }
}

/// What the main panel shows below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainBody {
    /// Message thread followed by the composer.
    Chat,
    Home(HomeSummary),
}

/// Presentation modifiers of the main panel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyModifiers {
    pub emulator: bool,
    pub rtl: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    ConversationList,
    BotInfo,
    Main {
        content: MainBody,
        modifiers: BodyModifiers,
    },
}

impl Body {
    pub fn panel(&self) -> Panel {
        match self {
            Self::Loading => Panel::Loading,
            Self::ConversationList => Panel::ConversationList,
            Self::BotInfo => Panel::BotInfo,
            Self::Main { .. } => Panel::Main,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabButton {
    pub tab: Tab,
    pub active: bool,
}

impl TabButton {
    pub fn label(&self) -> &'static str {
        self.tab.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    /// Buttons in display order: home first, then chat.
    pub fn buttons(&self) -> [TabButton; 2] {
        [Tab::Home, Tab::Chat].map(|tab| TabButton {
            tab,
            active: tab == self.active,
        })
    }
}

/// Presentation of the outer layout box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub fullscreen: bool,
    pub transition: SideTransition,
    pub width: f32,
}

/// One piece of chrome, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Slot(SlotName),
    Header,
    Body,
    TabBar,
    Footer,
}

/// Full description of one container render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerLayout {
    pub layout_box: LayoutBox,
    pub body: Body,
    pub tab_bar: Option<TabBar>,
    pub show_footer: bool,
}

impl ContainerLayout {
    /// Composes the container from the store, the open conversation and the local tab state.
    pub fn compose(
        state: &SharedViewState,
        conversation: Option<&Conversation>,
        tabs: &TabState,
        allow_list: &TabAllowList,
    ) -> Self {
        let tabs_enabled = allow_list.is_tab_enabled_for(&state.bot_id);

        let body = match select_panel(state) {
            Panel::Loading => Body::Loading,
            Panel::ConversationList => Body::ConversationList,
            Panel::BotInfo => Body::BotInfo,
            Panel::Main => {
                let content = if !tabs_enabled || tabs.active() == Tab::Chat {
                    MainBody::Chat
                } else {
                    MainBody::Home(HomeSummary::derive(messages_of(conversation)))
                };
                Body::Main {
                    content,
                    modifiers: BodyModifiers {
                        emulator: state.is_emulator,
                        rtl: state.rtl,
                    },
                }
            }
        };

        Self {
            layout_box: LayoutBox {
                fullscreen: state.is_fullscreen,
                transition: state.side_transition,
                width: state.dimensions.layout,
            },
            body,
            tab_bar: tabs_enabled.then(|| TabBar {
                active: tabs.active(),
            }),
            show_footer: state.is_powered_by_displayed,
        }
    }

    /// Sections inside the layout box, in render order.
    ///
    /// The `before_container` slot sits outside the box and is not listed.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Header, Section::Body];
        if self.tab_bar.is_some() {
            sections.push(Section::TabBar);
        }
        sections.push(Section::Slot(SlotName::BelowConversation));
        if self.show_footer {
            sections.push(Section::Footer);
        }
        sections
    }
}
