// src/filesystem/dir.rs
use super::{file, Entry, Listing};
use crate::config::ExplorerConfig;
use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// `Listing` over the real filesystem.
#[derive(Debug, Clone)]
pub struct DirListing {
    pub image_extensions: Vec<String>,
    pub show_hidden: bool,
}

impl DirListing {
    pub fn new(config: &ExplorerConfig) -> Self {
        DirListing {
            image_extensions: config.image_extensions.clone(),
            show_hidden: config.show_hidden,
        }
    }
}

impl Default for DirListing {
    fn default() -> Self {
        Self::new(&ExplorerConfig::default())
    }
}

impl Listing for DirListing {
    fn list(&self, dir: &Path, recursive: bool) -> Result<Vec<Entry>> {
        let mut walker = WalkDir::new(dir).min_depth(1).follow_links(true);
        if !recursive {
            walker = walker.max_depth(1);
        }
        let show_hidden = self.show_hidden;

        let mut entries = Vec::new();
        let iter = walker.into_iter().filter_entry(|e| {
            show_hidden || !file::is_hidden(&e.file_name().to_string_lossy())
        });
        for entry in iter {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself is unreadable: the listing fails as a whole.
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    log::debug!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if let Some(file_entry) = Entry::from_path(entry.path(), &self.image_extensions) {
                entries.push(file_entry);
            }
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tree() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("a.png"), b"png").unwrap();
        fs::write(root.path().join("notes.txt"), b"txt").unwrap();
        fs::write(root.path().join(".hidden.png"), b"png").unwrap();
        fs::write(root.path().join("sub").join("b.jpg"), b"jpg").unwrap();
        root
    }

    fn names(entries: &[Entry]) -> Vec<String> {
        let mut names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_list_immediate_children() {
        let root = tree();
        let entries = DirListing::default().list(root.path(), false).unwrap();
        assert_eq!(names(&entries), vec!["a.png", "notes.txt", "sub"]);
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert!(sub.is_dir);
    }

    #[test]
    fn test_list_recursive() {
        let root = tree();
        let entries = DirListing::default().list(root.path(), true).unwrap();
        assert_eq!(names(&entries), vec!["a.png", "b.jpg", "notes.txt", "sub"]);
    }

    #[test]
    fn test_show_hidden() {
        let root = tree();
        let listing = DirListing { show_hidden: true, ..DirListing::default() };
        let entries = listing.list(root.path(), false).unwrap();
        assert!(entries.iter().any(|e| e.name == ".hidden.png"));
    }

    #[test]
    fn test_missing_directory_fails() {
        let root = tree();
        let result = DirListing::default().list(&root.path().join("gone"), false);
        assert!(result.is_err());
    }
}
