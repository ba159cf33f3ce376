// src/save/src/lib.rs

use combat::Combatant;
use error::GameError;
use hero::Hero;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};


/// Save file used when nothing else is configured, relative to the working directory
pub const DEFAULT_SAVE_FILE: &str = "game_state.txt";

/// Saved state: the hero's name and health, nothing else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    pub name: String,
    pub hp: i64,
}

impl SaveData {
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            name: hero.name().to_string(),
            hp: i64::from(hero.hp()),
        }
    }

    /// Two lines: name, then health
    pub fn encode(&self) -> String {
        format!("{}\n{}\n", self.name, self.hp)
    }

    /// Reads the first two whitespace-separated tokens as name and health.
    /// Anything after them is ignored.
    pub fn decode(text: &str) -> Result<Self, GameError> {
        let mut tokens = text.split_whitespace();

        let name = tokens
            .next()
            .ok_or_else(|| GameError::CorruptedSave("missing player name".to_string()))?;
        let hp_token = tokens
            .next()
            .ok_or_else(|| GameError::CorruptedSave("missing health value".to_string()))?;
        let hp = hp_token.parse::<i64>().map_err(|_| {
            GameError::CorruptedSave(format!("invalid health value: {}", hp_token))
        })?;

        Ok(Self {
            name: name.to_string(),
            hp,
        })
    }

    /// Health is reached by damaging a fresh hero, not set directly.
    pub fn into_hero(self) -> Hero {
        Hero::restore(self.name, self.hp)
    }
}

/// Save system backed by one fixed save file
#[derive(Debug, Clone)]
pub struct SaveSystem {
    path: PathBuf,
}

impl Default for SaveSystem {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl SaveSystem {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Save the hero, replacing whatever the file held before
    pub fn save_game(&self, hero: &Hero) -> Result<(), GameError> {
        let data = SaveData::from_hero(hero);
        let temp_path = self.path.with_extension("tmp");

        let result = Self::write_file(&temp_path, &data)
            .and_then(|_| fs::rename(&temp_path, &self.path));

        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            warn!(path = %self.path.display(), error = %source, "save failed");
            return Err(GameError::SaveOpen {
                path: self.path.clone(),
                source,
            });
        }

        info!(path = %self.path.display(), name = %data.name, hp = data.hp, "game saved");
        Ok(())
    }

    /// 加载游戏状态
    pub fn load_game(&self) -> Result<Hero, GameError> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "load failed");
            if source.kind() == io::ErrorKind::InvalidData {
                GameError::CorruptedSave("save file is not valid text".to_string())
            } else {
                GameError::LoadOpen {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let data = SaveData::decode(&text)?;
        info!(path = %self.path.display(), name = %data.name, hp = data.hp, "game loaded");
        Ok(data.into_hero())
    }

    fn write_file(path: &Path, data: &SaveData) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(data.encode().as_bytes())?;
        // 确保数据写入磁盘
        file.flush()?;
        file.sync_all()
    }
}
