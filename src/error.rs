// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("watch failed: {0}")]
    Watch(#[from] notify::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid directory \"{}\"", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("no program available to open paths")]
    NoOpener,
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
