//! Game configuration: defaults, optional JSON file, CLI overrides.

use anyhow::{Context, Result};
use save::DEFAULT_SAVE_FILE;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where the single save slot lives
    pub save_file: PathBuf,
    pub music: MusicConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    pub enabled: bool,
    pub duration_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            music: MusicConfig::default(),
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: 5,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply command line overrides on top of file/default values
    pub fn with_overrides(
        mut self,
        save_file: Option<PathBuf>,
        music_secs: Option<u64>,
        no_music: bool,
    ) -> Self {
        if let Some(save_file) = save_file {
            self.save_file = save_file;
        }
        if let Some(secs) = music_secs {
            self.music.duration_secs = secs;
        }
        if no_music {
            self.music.enabled = false;
        }
        self
    }

    pub fn music_duration(&self) -> Duration {
        Duration::from_secs(self.music.duration_secs)
    }
}
