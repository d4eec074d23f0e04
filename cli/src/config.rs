// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use dayspan_core::Date;

/// The name of the dayspan application.
pub const APP_NAME: &str = "dayspan";

const DAYSPAN_CONFIG_ENV: &str = "DAYSPAN_CONFIG";

/// Resolves and loads the configuration.
///
/// The path is taken from the `--config` flag, then the `DAYSPAN_CONFIG` environment variable,
/// then the user config directory. Only a missing file in the user config directory falls back to
/// the defaults; an explicitly named file must exist.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(DAYSPAN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()?;
    config.normalize()?;
    Ok(config)
}

/// Configuration for the dayspan application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// strftime layout used to print dates, `Mon D, YYYY` if unset.
    #[serde(default)]
    pub date_format: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(layout) = &self.date_format {
            if layout.trim().is_empty() {
                self.date_format = None;
                return Ok(());
            }

            Date::from_ymd(2006, 1, 2)
                .try_format(layout)
                .map_err(|e| format!("Invalid date_format in config `{layout}`: {e}"))?;
        }
        Ok(())
    }

    /// Renders a date with the configured layout.
    pub fn render_date(&self, date: &Date) -> String {
        let Some(layout) = &self.date_format else {
            return date.to_string();
        };

        date.try_format(layout).unwrap_or_else(|err| {
            tracing::warn!(layout = layout.as_str(), %err, "failed to render date, using the default layout");
            date.to_string()
        })
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
