use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use gpui::*;
use gpui_component::{Theme, ThemeMode, ThemeRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use snafu::{ResultExt, Snafu};
use webchat_state::{DEFAULT_LAYOUT_WIDTH, DEFAULT_TAB_BOT_ID, TabAllowList};

pub const SETTINGS_DIRECTORY_NAME: &str = "webchat";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const DEFAULT_POWERED_BY_LABEL: &str = "Powered by Webchat";
pub const MIN_LAYOUT_WIDTH: f32 = 280.0;
pub const MAX_LAYOUT_WIDTH: f32 = 1200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebchatSettings {
    /// Bots that get the chat/home tab bar.
    #[serde(default = "default_tab_allow_list")]
    pub tab_allow_list: Vec<String>,
    #[serde(default = "default_layout_width")]
    pub layout_width: f32,
    #[serde(default = "default_powered_by_label")]
    pub powered_by_label: String,
    #[serde(
        default = "default_theme_mode",
        serialize_with = "serialize_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub theme_name: String,
}

impl Default for WebchatSettings {
    fn default() -> Self {
        Self {
            tab_allow_list: default_tab_allow_list(),
            layout_width: default_layout_width(),
            powered_by_label: default_powered_by_label(),
            theme_mode: default_theme_mode(),
            theme_name: String::new(),
        }
    }
}

impl WebchatSettings {
    pub fn allow_list(&self) -> TabAllowList {
        TabAllowList::new(self.tab_allow_list.iter().map(String::as_str))
    }

    pub fn normalized(mut self) -> Self {
        // An explicitly empty list is kept: it turns the tab bar off for every bot.
        self.tab_allow_list = self
            .tab_allow_list
            .into_iter()
            .map(|bot_id| bot_id.trim().to_string())
            .filter(|bot_id| !bot_id.is_empty())
            .collect();
        self.tab_allow_list.sort();
        self.tab_allow_list.dedup();

        self.layout_width = if self.layout_width.is_finite() {
            self.layout_width.clamp(MIN_LAYOUT_WIDTH, MAX_LAYOUT_WIDTH)
        } else {
            default_layout_width()
        };
        self.powered_by_label = self.powered_by_label.trim().to_string();
        self.theme_name = self.theme_name.trim().to_string();

        self
    }

    pub fn apply_theme(&self, window: Option<&mut Window>, cx: &mut App) {
        if let Some(theme_config) = ThemeRegistry::global(cx)
            .themes()
            .get(&SharedString::from(self.theme_name.trim().to_string()))
            .cloned()
        {
            let mode = theme_config.mode;
            let theme = Theme::global_mut(cx);
            if mode.is_dark() {
                theme.dark_theme = theme_config;
            } else {
                theme.light_theme = theme_config;
            }
            Theme::change(mode, window, cx);
            return;
        }

        Theme::change(self.theme_mode, window, cx);
    }
}

/// Reads settings from `path`, layered over the defaults.
pub fn read_settings(path: &Path) -> Result<WebchatSettings, SettingsError> {
    Figment::from(Serialized::defaults(WebchatSettings::default()))
        .merge(Json::file(path))
        .extract::<WebchatSettings>()
        .map(WebchatSettings::normalized)
        .context(ExtractSettingsSnafu {
            stage: "extract-settings-json",
            path: path.to_path_buf(),
        })
}

pub struct SettingsStore {
    settings: Arc<ArcSwap<WebchatSettings>>,
    config_path: PathBuf,
}

impl SettingsStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(SETTINGS_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".webchat"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_disk(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn settings(&self) -> Arc<WebchatSettings> {
        self.settings.load_full()
    }

    pub fn update(&self, settings: WebchatSettings) -> Result<(), SettingsError> {
        let normalized_settings = settings.normalized();
        self.persist(&normalized_settings)?;
        self.settings.store(Arc::new(normalized_settings));
        Ok(())
    }

    fn load_from_disk(path: &Path) -> WebchatSettings {
        if !path.exists() {
            tracing::info!("settings file not found at {:?}, using defaults", path);
            return WebchatSettings::default();
        }

        match read_settings(path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!("{error}. using defaults");
                WebchatSettings::default()
            }
        }
    }

    fn persist(&self, settings: &WebchatSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirSnafu {
                stage: "create-settings-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let content = serde_json::to_string_pretty(settings).context(SerializeConfigSnafu {
            stage: "serialize-settings-json",
        })?;

        let temp_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, content).context(WriteFileSnafu {
            stage: "write-temporary-settings-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.config_path).context(RenameTempFileSnafu {
            stage: "rename-temporary-settings-file",
            from: temp_path,
            to: self.config_path.clone(),
        })?;

        tracing::info!("saved settings to {:?}", self.config_path);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("failed to parse settings from {path:?} on `{stage}`: {source}"))]
    ExtractSettings {
        stage: &'static str,
        path: PathBuf,
        #[snafu(source(from(figment::Error, Box::new)))]
        source: Box<figment::Error>,
    },
    #[snafu(display("failed to create settings directory at {path:?} on `{stage}`: {source}"))]
    CreateDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize settings on `{stage}`: {source}"))]
    SerializeConfig {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to write settings file at {path:?} on `{stage}`: {source}"))]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "failed to replace settings file from {from:?} to {to:?} on `{stage}`: {source}"
    ))]
    RenameTempFile {
        stage: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Settings entity shared by the shell and the container.
pub struct SettingsState {
    store: SettingsStore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsChanged {
    pub settings: WebchatSettings,
}

impl EventEmitter<SettingsChanged> for SettingsState {}

impl SettingsState {
    pub fn new(cx: &mut App) -> Entity<Self> {
        cx.new(|_| Self {
            store: SettingsStore::load(),
        })
    }

    pub fn settings(&self) -> Arc<WebchatSettings> {
        self.store.settings()
    }

    pub fn update_settings(
        &mut self,
        settings: WebchatSettings,
        cx: &mut Context<Self>,
    ) -> Result<(), SettingsError> {
        let normalized_settings = settings.normalized();
        self.store.update(normalized_settings.clone())?;
        cx.emit(SettingsChanged {
            settings: normalized_settings,
        });
        cx.notify();
        Ok(())
    }
}

fn default_tab_allow_list() -> Vec<String> {
    vec![DEFAULT_TAB_BOT_ID.to_string()]
}

fn default_layout_width() -> f32 {
    DEFAULT_LAYOUT_WIDTH
}

fn default_powered_by_label() -> String {
    DEFAULT_POWERED_BY_LABEL.to_string()
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn serialize_theme_mode<S>(value: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(parse_theme_mode(&value))
}

fn parse_theme_mode(value: &str) -> ThemeMode {
    if value.trim().eq_ignore_ascii_case("dark") {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webchat_state::BotId;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "webchat-settings-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[::core::prelude::v1::test]
    fn missing_file_falls_back_to_defaults() {
        let dir = scratch_dir("missing");
        let store = SettingsStore::new(dir.join(SETTINGS_FILE_NAME));

        let settings = store.settings();
        assert_eq!(settings.tab_allow_list, vec!["textbot".to_string()]);
        assert_eq!(settings.layout_width, DEFAULT_LAYOUT_WIDTH);
        assert!(settings.allow_list().is_tab_enabled_for(&BotId::new("textbot")));
    }

    #[::core::prelude::v1::test]
    fn partial_file_is_layered_over_defaults() {
        let dir = scratch_dir("partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "tab_allow_list": [" supportbot ", "", "textbot", "supportbot"], "theme_mode": "dark" }"#,
        )
        .unwrap();

        let settings = read_settings(&path).unwrap();

        assert_eq!(
            settings.tab_allow_list,
            vec!["supportbot".to_string(), "textbot".to_string()]
        );
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.powered_by_label, DEFAULT_POWERED_BY_LABEL);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[::core::prelude::v1::test]
    fn malformed_file_reports_extract_error_and_store_uses_defaults() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let error = read_settings(&path).unwrap_err();
        assert!(matches!(error, SettingsError::ExtractSettings { .. }));

        let store = SettingsStore::new(path);
        assert_eq!(*store.settings(), WebchatSettings::default());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[::core::prelude::v1::test]
    fn update_persists_normalized_settings() {
        let dir = scratch_dir("update");
        let path = dir.join(SETTINGS_FILE_NAME);
        let store = SettingsStore::new(path.clone());

        let settings = WebchatSettings {
            tab_allow_list: vec!["  helpbot".to_string()],
            layout_width: 10_000.0,
            ..WebchatSettings::default()
        };
        store.update(settings).unwrap();

        assert_eq!(store.settings().layout_width, MAX_LAYOUT_WIDTH);
        let reloaded = SettingsStore::new(path);
        assert_eq!(reloaded.settings().tab_allow_list, vec!["helpbot".to_string()]);
        assert_eq!(reloaded.settings().layout_width, MAX_LAYOUT_WIDTH);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[::core::prelude::v1::test]
    fn explicit_empty_allow_list_disables_tabs() {
        let settings = WebchatSettings {
            tab_allow_list: vec!["   ".to_string()],
            ..WebchatSettings::default()
        }
        .normalized();

        assert!(settings.allow_list().is_empty());
    }
}
