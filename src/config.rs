//! Configuration management for todoflow
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, STATS_PANEL_DEFAULT_WIDTH, STATS_PANEL_MAX_WIDTH, STATS_PANEL_MIN_WIDTH};
use crate::icons::IconTheme;
use crate::utils::datetime;
use crate::view_model::{Filter, ViewMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub celebration: CelebrationConfig,
    pub notifications: NotificationConfig,
    pub voice: VoiceConfig,
    pub session: SessionConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Filter active on startup
    /// Options: "all", "todo", "in-progress", "completed"
    pub default_filter: String,
    /// View mode on startup: "grid" or "spatial"
    pub default_view_mode: String,
    /// Statistics panel width in columns
    pub stats_panel_width: u16,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Celebration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Show celebration overlays
    pub enabled: bool,
    /// Completed tasks between milestone celebrations
    pub milestone_interval: usize,
    /// Delay before a reached milestone is celebrated
    pub milestone_delay_ms: u64,
    /// How long a celebration stays on screen
    pub display_ms: u64,
}

/// Toast notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
    pub max_visible: usize,
}

/// Voice command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Enable the voice command prompt
    pub enabled: bool,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Environment variable holding the signed-in user's name
    pub user_env: String,
}

/// Task store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store type (e.g., "memory")
    pub store_type: String,
    /// Store-specific options as a JSON object
    pub options: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_filter: "all".to_string(),
            default_view_mode: "grid".to_string(),
            stats_panel_width: STATS_PANEL_DEFAULT_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            milestone_interval: 5,
            milestone_delay_ms: 500,
            display_ms: 2500,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            max_visible: 3,
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_env: "TODOFLOW_USER".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: "memory".to_string(),
            options: r#"{"seed_demo": false}"#.to_string(),
        }
    }
}

impl CelebrationConfig {
    pub fn milestone_delay(&self) -> Duration {
        Duration::from_millis(self.milestone_delay_ms)
    }

    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todoflow.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("todoflow").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.stats_panel_width < STATS_PANEL_MIN_WIDTH || self.ui.stats_panel_width > STATS_PANEL_MAX_WIDTH {
            anyhow::bail!(
                "stats_panel_width must be between {} and {} columns, got {}",
                STATS_PANEL_MIN_WIDTH,
                STATS_PANEL_MAX_WIDTH,
                self.ui.stats_panel_width
            );
        }
        self.default_filter()?;
        self.default_view_mode()?;

        // Validate celebrations
        if self.celebration.milestone_interval == 0 {
            anyhow::bail!("milestone_interval must be at least 1");
        }
        if self.celebration.milestone_delay_ms > 10_000 {
            anyhow::bail!("milestone_delay_ms cannot exceed 10000 (10 seconds)");
        }

        if self.notifications.max_visible == 0 {
            anyhow::bail!("notifications.max_visible must be at least 1");
        }

        if self.session.user_env.trim().is_empty() {
            anyhow::bail!("session.user_env cannot be empty");
        }

        // Validate store configuration
        match self.store.store_type.as_str() {
            "memory" => {}
            store_type => anyhow::bail!("unsupported store_type '{}'", store_type),
        }
        if !self.store.options.trim().is_empty() {
            serde_json::from_str::<serde_json::Value>(&self.store.options)
                .with_context(|| format!("Invalid store options '{}'", self.store.options))?;
        }

        Ok(())
    }

    pub fn default_filter(&self) -> Result<Filter> {
        self.ui
            .default_filter
            .parse()
            .with_context(|| format!("Invalid default_filter '{}'", self.ui.default_filter))
    }

    pub fn default_view_mode(&self) -> Result<ViewMode> {
        self.ui
            .default_view_mode
            .parse()
            .with_context(|| format!("Invalid default_view_mode '{}'", self.ui.default_view_mode))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todoflow Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todoflow"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
