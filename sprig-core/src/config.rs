use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const APP_NAME: &str = "sprig";

fn config_dir() -> PathBuf {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".config")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .expect("Unable to find config directory")
            .join(APP_NAME)
    }
}

fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Quit immediately after a successful branch switch instead of
    /// staying open showing the new state. The `--quit-on-switch` CLI
    /// flag forces this on regardless of the config value.
    #[serde(default)]
    pub quit_on_switch: bool,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent: ThemeColor,
    #[serde(default = "default_secondary")]
    pub secondary: ThemeColor,
    #[serde(default = "default_success")]
    pub success: ThemeColor,
    #[serde(default = "default_error")]
    pub error: ThemeColor,
    #[serde(default = "default_muted")]
    pub muted: ThemeColor,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            secondary: default_secondary(),
            success: default_success(),
            error: default_error(),
            muted: default_muted(),
            highlight_fg: default_highlight_fg(),
        }
    }
}

fn default_accent() -> ThemeColor {
    ThemeColor::Named(NamedColor::Magenta)
}
fn default_secondary() -> ThemeColor {
    ThemeColor::Named(NamedColor::Cyan)
}
fn default_success() -> ThemeColor {
    ThemeColor::Named(NamedColor::Green)
}
fn default_error() -> ThemeColor {
    ThemeColor::Named(NamedColor::Red)
}
fn default_muted() -> ThemeColor {
    ThemeColor::Named(NamedColor::DarkGray)
}
fn default_highlight_fg() -> ThemeColor {
    ThemeColor::Named(NamedColor::Black)
}

/// Either a named terminal color (`accent = "magenta"`) or an RGB
/// triple (`accent = [255, 0, 255]`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

/// Load the config file, or the explicit `path` override. A missing
/// file is not an error: everything has a sensible default.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let file = path.map_or_else(config_file, Path::to_path_buf);
    if !file.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&file)?;
    load_config_from_str(&contents)
}
