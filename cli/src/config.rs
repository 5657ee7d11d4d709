// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use icsline_ical::{FoldingStyle, FormatOptions};
use tokio::fs;

use crate::APP_NAME;

const ICSLINE_CONFIG_ENV: &str = "ICSLINE_CONFIG";

/// Load the configuration.
///
/// Lookup order is the `--config` flag, then `ICSLINE_CONFIG`, then
/// `$XDG_CONFIG_HOME/icsline/config.toml`. A missing default file yields the
/// default configuration; an explicitly named file must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(ICSLINE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::warn!("{e}, using default configuration");
                return Ok(Config::default());
            }
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the icsline command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output layout used by `fmt`
    pub format: FormatConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// The `[format]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Maximum octets per physical line, `0` disables folding
    pub max_line_octets: usize,

    /// Leading whitespace of continuation lines
    pub folding_style: ConfigFoldingStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_line_octets: 75,
            folding_style: ConfigFoldingStyle::Space,
        }
    }
}

impl FormatConfig {
    pub fn options(&self) -> FormatOptions {
        let folding = match self.max_line_octets {
            0 => None,
            max => Some(max),
        };
        FormatOptions::default()
            .folding(folding)
            .folding_style(self.folding_style.into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFoldingStyle {
    #[default]
    Space,
    Tab,
}

impl From<ConfigFoldingStyle> for FoldingStyle {
    fn from(value: ConfigFoldingStyle) -> Self {
        match value {
            ConfigFoldingStyle::Space => FoldingStyle::Space,
            ConfigFoldingStyle::Tab => FoldingStyle::Tab,
        }
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
