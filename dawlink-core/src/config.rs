use std::path::{Path, PathBuf};

use dawlink_model::BankSizes;
use serde::Deserialize;

use crate::value::ValueRange;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    banks: BanksConfig,
    #[serde(default)]
    values: ValuesConfig,
    #[serde(default)]
    display: DisplayConfig,
}

#[derive(Deserialize, Default)]
struct BanksConfig {
    tracks: Option<usize>,
    sends: Option<usize>,
    parameters: Option<usize>,
    siblings: Option<usize>,
    browser_results: Option<usize>,
}

#[derive(Deserialize, Default)]
struct ValuesConfig {
    upper_bound: Option<u32>,
}

#[derive(Deserialize, Default)]
struct DisplayConfig {
    id: Option<u8>,
    width: Option<u16>,
    height: Option<u16>,
}

/// Geometry of the controller display the encoder targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub id: u8,
    pub width: u16,
    pub height: u16,
}

pub struct Config {
    banks: BanksConfig,
    values: ValuesConfig,
    display: DisplayConfig,
}

impl Config {
    /// Embedded defaults, overridden by the user config file if present.
    pub fn load() -> Self {
        let mut config = Self::embedded();
        if let Some(path) = user_config_path() {
            if path.exists() {
                config.merge_file(&path);
            }
        }
        config
    }

    /// Embedded defaults only.
    pub fn embedded() -> Self {
        let base: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!(target: "config", "embedded config.toml is invalid: {}", e);
            ConfigFile::default()
        });
        Config {
            banks: base.banks,
            values: base.values,
            display: base.display,
        }
    }

    /// Overlay the values set in `path`. Unreadable or malformed files are
    /// logged and ignored.
    pub fn merge_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => {
                    merge_banks(&mut self.banks, user.banks);
                    merge_values(&mut self.values, user.values);
                    merge_display(&mut self.display, user.display);
                }
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
    }

    pub fn bank_sizes(&self) -> BankSizes {
        let fallback = BankSizes::default();
        BankSizes {
            tracks: self.banks.tracks.unwrap_or(fallback.tracks),
            sends: self.banks.sends.unwrap_or(fallback.sends),
            parameters: self.banks.parameters.unwrap_or(fallback.parameters),
            siblings: self.banks.siblings.unwrap_or(fallback.siblings),
            browser_results: self
                .banks
                .browser_results
                .unwrap_or(fallback.browser_results),
        }
    }

    pub fn value_range(&self) -> ValueRange {
        self.values
            .upper_bound
            .map(ValueRange::new)
            .unwrap_or_default()
    }

    /// Display geometry, clamped to the 480x270 hardware screen.
    pub fn display(&self) -> DisplaySettings {
        DisplaySettings {
            id: self.display.id.unwrap_or(0),
            width: self.display.width.unwrap_or(480).clamp(1, 480),
            height: self.display.height.unwrap_or(270).clamp(1, 270),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dawlink").join("config.toml"))
}

fn merge_banks(base: &mut BanksConfig, user: BanksConfig) {
    if user.tracks.is_some() {
        base.tracks = user.tracks;
    }
    if user.sends.is_some() {
        base.sends = user.sends;
    }
    if user.parameters.is_some() {
        base.parameters = user.parameters;
    }
    if user.siblings.is_some() {
        base.siblings = user.siblings;
    }
    if user.browser_results.is_some() {
        base.browser_results = user.browser_results;
    }
}

fn merge_values(base: &mut ValuesConfig, user: ValuesConfig) {
    if user.upper_bound.is_some() {
        base.upper_bound = user.upper_bound;
    }
}

fn merge_display(base: &mut DisplayConfig, user: DisplayConfig) {
    if user.id.is_some() {
        base.id = user.id;
    }
    if user.width.is_some() {
        base.width = user.width;
    }
    if user.height.is_some() {
        base.height = user.height;
    }
}
