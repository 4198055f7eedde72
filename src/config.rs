use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::{board::Color, search::MAX_DEPTH};

/// The longest opening the arena will enumerate
pub const MAX_OPENING_PLIES: usize = 4;

/// Top-level application configuration, loadable from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched by the computer player
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The side that drops the first disc
    pub first: Color,
    /// The side played by the computer; absent for two human players
    pub computer: Option<Color>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: Color::Yellow,
            computer: Some(Color::Red),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Length of the enumerated openings each arena game starts from
    pub opening_plies: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { opening_plies: 2 }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.depth == 0 || self.search.depth > MAX_DEPTH {
            bail!("search.depth must be between 1 and {}", MAX_DEPTH);
        }
        if self.arena.opening_plies > MAX_OPENING_PLIES {
            bail!("arena.opening_plies must be at most {}", MAX_OPENING_PLIES);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        AppConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[search]\ndepth = 6\n").unwrap();
        assert_eq!(config.search.depth, 6);
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.arena.opening_plies, 2);
    }

    #[test]
    fn colors_parse_lowercase() {
        let config: AppConfig =
            toml::from_str("[game]\nfirst = \"red\"\ncomputer = \"yellow\"\n").unwrap();
        assert_eq!(config.game.first, Color::Red);
        assert_eq!(config.game.computer, Some(Color::Yellow));
    }

    #[test]
    fn validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_long_openings() {
        let mut config = AppConfig::default();
        config.arena.opening_plies = MAX_OPENING_PLIES + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[search]\ndepth = 2\n\n[arena]\nopening_plies = 1").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.depth, 2);
        assert_eq!(config.arena.opening_plies, 1);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn default_toml_roundtrips() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
