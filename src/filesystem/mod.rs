// src/filesystem/mod.rs
pub mod dir;
pub mod file;
pub mod watcher;

pub use dir::DirListing;
pub use watcher::{DirectoryWatch, DirectoryWatcher};

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Snapshot of one filesystem node, taken at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_image: bool,
    pub size: u64,
    pub mtime: Option<DateTime<Utc>>,
}

/// Source of directory entries.
pub trait Listing {
    /// Children of `dir`, or its whole subtree when `recursive` is set.
    fn list(&self, dir: &Path, recursive: bool) -> Result<Vec<Entry>>;
    fn is_dir(&self, path: &Path) -> bool;
}
