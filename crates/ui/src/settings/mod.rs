pub mod state;

pub use state::{
    SettingsChanged, SettingsError, SettingsState, SettingsStore, WebchatSettings, read_settings,
};
