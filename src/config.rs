//! Color configuration with optional theme file support.
//!
//! Resolution starts from the built-in palette and, when a theme file is
//! present, overlays the selected theme on top of it (highest precedence
//! first):
//! 1. Theme entries (`themes.<name>.log_levels`, `themes.<name>.components`)
//! 2. Built-in defaults
//!
//! Theme loading is fail-open. A missing file, unreadable file, malformed
//! document or unknown theme name all resolve to the defaults; see
//! [`ConfigError`] for the full catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{self, ColorCode};
use crate::error::ConfigError;

/// Conventional theme file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".platformio/monitor_colors.json";

/// Structural parts of a log line that carry their own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Timestamp,
    Filename,
    Function,
    Message,
    Brackets,
}

impl Component {
    pub const ALL: [Self; 5] = [
        Self::Timestamp,
        Self::Filename,
        Self::Function,
        Self::Message,
        Self::Brackets,
    ];

    /// Key used for this component in theme files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Filename => "filename",
            Self::Function => "function",
            Self::Message => "message",
            Self::Brackets => "brackets",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Resolved color tables, immutable once built and shared read-only by every
/// colorization call.
///
/// Every lookup has a defined answer: levels without an entry use the
/// [`Component::Message`] color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConfig {
    levels: HashMap<String, ColorCode>,
    components: [ColorCode; 5],
    reset: ColorCode,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let levels = [
            ("ERROR", color::RED),
            ("WARN", color::YELLOW),
            ("INFO", color::GREEN),
            ("DEBUG", color::CYAN),
            ("TRACE", color::MAGENTA),
        ]
        .into_iter()
        .map(|(name, code)| (name.to_string(), ColorCode::from(code)))
        .collect();

        Self {
            levels,
            components: [
                ColorCode::from(color::WHITE),
                ColorCode::from(color::DARK_GRAY),
                ColorCode::from(color::DARK_GRAY),
                ColorCode::from(color::WHITE),
                ColorCode::from(color::DARK_GRAY),
            ],
            reset: ColorCode::from(color::RESET),
        }
    }
}

impl ColorConfig {
    /// A configuration whose every code is empty.
    ///
    /// The formatter still normalizes structured lines but emits no escapes.
    pub fn plain() -> Self {
        Self {
            levels: HashMap::new(),
            components: Default::default(),
            reset: ColorCode::default(),
        }
    }

    /// Color for a severity level. The name is trimmed and matched
    /// case-sensitively.
    pub fn level_color(&self, level: &str) -> &ColorCode {
        self.levels
            .get(level.trim())
            .unwrap_or_else(|| self.component_color(Component::Message))
    }

    pub fn component_color(&self, component: Component) -> &ColorCode {
        &self.components[component.index()]
    }

    pub fn reset(&self) -> &ColorCode {
        &self.reset
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>, code: impl Into<ColorCode>) -> Self {
        self.levels.insert(level.into(), code.into());
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: Component, code: impl Into<ColorCode>) -> Self {
        self.components[component.index()] = code.into();
        self
    }

    /// Overlay a theme. Only keys present in the theme are replaced; unknown
    /// component keys are ignored.
    pub fn apply_theme(&mut self, theme: &Theme) {
        for (level, value) in &theme.log_levels {
            self.levels
                .insert(level.clone(), ColorCode::from_theme_value(value));
        }
        for (key, value) in &theme.components {
            match Component::from_key(key) {
                Some(component) => {
                    self.components[component.index()] = ColorCode::from_theme_value(value);
                }
                None => tracing::debug!(key = %key, "ignoring unknown theme component"),
            }
        }
    }

    /// Load the defaults overlaid with the selected theme from `path`.
    ///
    /// `theme` replaces the file's own `theme` selector when given. Files
    /// ending in `.toml` are parsed as TOML, everything else as JSON.
    pub fn load(path: &Path, theme: Option<&str>) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file = if path.extension().is_some_and(|ext| ext == "toml") {
            ThemeFile::from_toml(&content)?
        } else {
            ThemeFile::from_json(&content)?
        };

        let mut config = Self::default();
        config.apply_theme(file.select(theme)?);
        Ok(config)
    }

    /// Fail-open variant of [`ColorConfig::load`]: any failure yields the
    /// defaults. Causes are only reported at `debug` level.
    pub fn resolve(path: &Path, theme: Option<&str>) -> Self {
        match Self::load(path, theme) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "applied color theme");
                config
            }
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "no theme file, using default colors");
                Self::default()
            }
            Err(e) => {
                tracing::debug!("{e}; using default colors");
                Self::default()
            }
        }
    }
}

/// Resolve the color configuration from the conventional theme file location.
pub fn resolve_config() -> ColorConfig {
    ColorConfig::resolve(&default_config_path(), None)
}

/// `./.platformio/monitor_colors.json` under the current working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir.join(DEFAULT_CONFIG_PATH),
        Err(_) => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

/// A named set of color overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub log_levels: HashMap<String, String>,
    #[serde(default)]
    pub components: HashMap<String, String>,
}

/// Theme file structure (JSON or TOML deserialization).
#[derive(Debug, Deserialize)]
struct ThemeFile {
    theme: Option<String>,
    themes: Option<HashMap<String, Theme>>,
}

impl ThemeFile {
    fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn select(&self, theme_override: Option<&str>) -> Result<&Theme, ConfigError> {
        let name = theme_override
            .or(self.theme.as_deref())
            .ok_or(ConfigError::NoThemeSelected)?;
        let themes = self.themes.as_ref().ok_or(ConfigError::NoThemeSelected)?;
        themes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))
    }
}
