// src/filesystem/file.rs
use super::Entry;
use std::path::Path;

pub fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl Entry {
    pub fn from_path(path: &Path, image_extensions: &[String]) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_dir = metadata.is_dir();
        let is_image = !is_dir && has_image_extension(path, image_extensions);
        let size = metadata.len();
        let mtime = metadata.modified().ok()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t));

        Some(Entry { path: path.to_path_buf(), name, is_dir, is_image, size, mtime })
    }

    pub fn is_listable(&self) -> bool {
        self.is_dir || self.is_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use std::env;

    #[test]
    fn test_entry_from_path() {
        let path = env::current_dir().unwrap();
        let entry = Entry::from_path(&path, &ExplorerConfig::default().image_extensions).unwrap();
        assert!(entry.is_dir);
        assert!(!entry.is_image);
        assert!(entry.is_listable());
    }

    #[test]
    fn test_image_extension_is_case_insensitive() {
        let exts = ExplorerConfig::default().image_extensions;
        assert!(has_image_extension(Path::new("/a/photo.PNG"), &exts));
        assert!(has_image_extension(Path::new("/a/photo.jpeg"), &exts));
        assert!(!has_image_extension(Path::new("/a/notes.txt"), &exts));
        assert!(!has_image_extension(Path::new("/a/png"), &exts));
    }

    #[test]
    fn test_missing_path_has_no_entry() {
        assert!(Entry::from_path(Path::new("/definitely/not/here.png"), &[]).is_none());
    }
}
