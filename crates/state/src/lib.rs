pub mod home;
pub mod ids;
pub mod layout;
pub mod message;
pub mod panel;
pub mod tabs;
pub mod view;

pub use home::{HOME_EMPTY_MESSAGE, HOME_HEADING, HomeSummary, RecentChat};
pub use ids::{AuthorId, BotId, ConversationId, MessageId};
pub use layout::{
    Body, BodyModifiers, ContainerLayout, LayoutBox, MainBody, Section, SlotName, TabBar,
    TabButton,
};
pub use message::{Conversation, Message, Payload, messages_of};
pub use panel::{Panel, select_panel};
pub use tabs::{DEFAULT_TAB_BOT_ID, Tab, TabAction, TabAllowList, TabState};
pub use view::{DEFAULT_LAYOUT_WIDTH, Dimensions, DisplayMode, SharedViewState, SideTransition};
