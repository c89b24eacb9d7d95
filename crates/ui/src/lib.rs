#![deny(unsafe_code)]

/// Embeddable chat widget shell built with GPUI and gpui-component.
///
/// The container picks one panel from the shared store and renders the widget chrome
/// (header, tab bar, extension slots, footer) around it.
pub mod app;
/// Widget collaborators rendered by the container.
pub mod components;
pub mod container;
/// Settings persistence.
pub mod settings;
pub mod slots;
/// Shared widget store observed by the container.
pub mod store;

pub use container::{Container, RecentChatSelected};
pub use slots::ExtensionSlots;
pub use store::WebchatStore;
