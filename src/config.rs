// src/config.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "svg"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub start_directory: Option<PathBuf>,
    pub image_extensions: Vec<String>,
    pub show_hidden: bool,
    pub watch: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            start_directory: None,
            image_extensions: DEFAULT_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            show_hidden: false,
            watch: true,
        }
    }
}

impl ExplorerConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("imgnav").join("config.json"))
    }

    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolves the directory to open first: explicit argument, then the
    /// configured start directory, then the working directory, then home.
    pub fn initial_directory(&self, arg: Option<PathBuf>) -> Option<PathBuf> {
        arg.or_else(|| self.start_directory.clone())
            .or_else(|| std::env::current_dir().ok())
            .or_else(dirs::home_dir)
    }
}
