//! Persistent settings: the high score and which texture set to use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::textures::TextureStyle;

const CONFIG_FILE: &str = ".duck_hunt.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub high_score: u32,
    pub use_remake_textures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            high_score: 0,
            use_remake_textures: true,
        }
    }
}

/// `$HOME/.duck_hunt.json`, or the working directory without a home.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

impl Config {
    /// Reads `path`.  A missing or malformed file gives the defaults.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "no config file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), high_score = self.high_score, "saved config");
        Ok(())
    }

    /// Keeps the better of the stored and the new score.  Returns true when
    /// `score` is a new record.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    pub fn texture_style(&self) -> TextureStyle {
        if self.use_remake_textures {
            TextureStyle::Remake
        } else {
            TextureStyle::Classic
        }
    }
}
