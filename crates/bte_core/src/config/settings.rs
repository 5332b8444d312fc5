//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::RenderPreset;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Window placement.
    #[serde(default)]
    pub window: WindowSettings,

    /// Render submission defaults.
    #[serde(default)]
    pub export: ExportSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            export: ExportSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Identifies a settings section for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Window,
    Export,
    Logging,
}

impl ConfigSection {
    /// TOML table name of this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Window => "window",
            ConfigSection::Export => "export",
            ConfigSection::Logging => "logging",
        }
    }
}

/// Exporter window placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_x")]
    pub x: i32,

    #[serde(default = "default_window_y")]
    pub y: i32,

    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_x() -> i32 {
    100
}

fn default_window_y() -> i32 {
    100
}

fn default_window_width() -> u32 {
    400
}

fn default_window_height() -> u32 {
    700
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            x: default_window_x(),
            y: default_window_y(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Defaults the submit controls start from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Preset label preselected in the dropdown.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Whether the "cut off slate" checkbox starts checked.
    #[serde(default)]
    pub cut_off_slate: bool,
}

fn default_preset() -> String {
    RenderPreset::CURRENT_SETTINGS_LABEL.to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            cut_off_slate: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log verbosity (RUST_LOG overrides).
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily-rolling log file.
    #[serde(default)]
    pub log_to_file: bool,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: false,
            logs_folder: default_logs_folder(),
        }
    }
}
