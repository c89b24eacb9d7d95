pub mod bot_info;
pub mod composer;
pub mod conversation_list;
pub mod footer;
pub mod header;
pub mod loading;
pub mod message_list;

pub use bot_info::BotInfo;
pub use composer::{Composer, ComposerSubmit};
pub use conversation_list::ConversationList;
pub use footer::Footer;
pub use header::Header;
pub use loading::LoadingPanel;
pub use message_list::MessageList;
