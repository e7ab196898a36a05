//! Shell configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use jungle_core::Player;

/// Display settings for the terminal shell.
///
/// Every field is optional in the TOML file; missing ones keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Names shown for Player One and Player Two
    pub player_names: [String; 2],
    /// Mark the legal destinations of a selected piece
    pub show_targets: bool,
    /// Print axis labels around the board
    pub coordinates: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player_names: ["Yellow".to_string(), "Red".to_string()],
            show_targets: true,
            coordinates: true,
        }
    }
}

impl ShellConfig {
    /// Load from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    #[inline]
    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player.index()]
    }
}
