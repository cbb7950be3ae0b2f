use std::path::{Path, PathBuf};

use anyhow::Context as _;
use meme_room_adapters::render::DEFAULT_DELIVERY_BASE_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub asset_dir: PathBuf,
    pub upload_folder: String,
    pub cloud_name: String,
    pub delivery_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("meme-room.sqlite3"),
            asset_dir: PathBuf::from("assets"),
            upload_folder: "uploads".to_string(),
            cloud_name: "demo".to_string(),
            delivery_base_url: DEFAULT_DELIVERY_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("meme-room");
        path.push("config.toml");
        path
    })
}
