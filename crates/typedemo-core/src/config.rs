use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Pauses the typing engine inserts between units of a script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause after the last line before the script starts over
    #[serde(default = "default_restart_pause")]
    pub restart_pause_ms: u64,
    /// Pause between two lines, independent of the line's own speed
    #[serde(default = "default_line_pause")]
    pub line_pause_ms: u64,
    /// Pause after a whole-line ("selected text") reveal
    #[serde(default = "default_reveal_whole_pause")]
    pub reveal_whole_pause_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            restart_pause_ms: default_restart_pause(),
            line_pause_ms: default_line_pause(),
            reveal_whole_pause_ms: default_reveal_whole_pause(),
        }
    }
}

impl EngineConfig {
    pub fn restart_pause(&self) -> Duration {
        Duration::from_millis(self.restart_pause_ms)
    }

    pub fn line_pause(&self) -> Duration {
        Duration::from_millis(self.line_pause_ms)
    }

    pub fn reveal_whole_pause(&self) -> Duration {
        Duration::from_millis(self.reveal_whole_pause_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Tab shown on startup
    #[serde(default = "default_initial_tab")]
    pub initial_tab: String,
    /// Chat mode selected on startup: "agent", "ask" or "manual"
    #[serde(default = "default_initial_mode")]
    pub initial_mode: String,
    /// Delay before the first demo starts typing
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,
    /// Delay between a tab switch and the new demo starting
    #[serde(default = "default_tab_switch_delay")]
    pub tab_switch_delay_ms: u64,
    /// Delay between a chat mode switch and the new demo starting
    #[serde(default = "default_mode_switch_delay")]
    pub mode_switch_delay_ms: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            initial_tab: default_initial_tab(),
            initial_mode: default_initial_mode(),
            initial_delay_ms: default_initial_delay(),
            tab_switch_delay_ms: default_tab_switch_delay(),
            mode_switch_delay_ms: default_mode_switch_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Cursor blink half-period in milliseconds (0 = steady cursor)
    #[serde(default = "default_cursor_blink")]
    pub cursor_blink_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cursor_blink_ms: default_cursor_blink(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with 'name' and 'colors'
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (bars)
    pub bg1: Option<String>,
    /// Primary foreground (typed text)
    pub fg0: Option<String>,
    /// Accent color (active tab, cursor)
    pub accent: Option<String>,
    /// Emphasized demo lines
    pub emphasis: Option<String>,
    /// Background of whole-line "selected" reveals
    pub selection: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_restart_pause() -> u64 {
    3000
}

fn default_line_pause() -> u64 {
    100
}

fn default_reveal_whole_pause() -> u64 {
    500
}

fn default_initial_tab() -> String {
    "tab".to_string()
}

fn default_initial_mode() -> String {
    "agent".to_string()
}

fn default_initial_delay() -> u64 {
    1000
}

fn default_tab_switch_delay() -> u64 {
    100
}

fn default_mode_switch_delay() -> u64 {
    300
}

fn default_tick_rate() -> u64 {
    50
}

fn default_cursor_blink() -> u64 {
    530
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Always ~/.config/typedemo/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("typedemo")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.engine.restart_pause(), Duration::from_millis(3000));
        assert_eq!(config.engine.line_pause(), Duration::from_millis(100));
        assert_eq!(config.engine.reveal_whole_pause(), Duration::from_millis(500));
        assert_eq!(config.selector.initial_tab, "tab");
        assert_eq!(config.selector.initial_mode, "agent");
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let doc = r##"
[ui.theme]
name = "dracula"
colors = { accent = "#ff0000" }
"##;
        let config = AppConfig::from_toml(doc).unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_partial_engine_section() {
        let config = AppConfig::from_toml("[engine]\nline_pause_ms = 20\n").unwrap();
        assert_eq!(config.engine.line_pause_ms, 20);
        assert_eq!(config.engine.restart_pause_ms, 3000);
    }

    #[test]
    fn test_invalid_document_is_config_error() {
        let err = AppConfig::from_toml("[engine\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
