// src/explorer/sort.rs
use crate::filesystem::Entry;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Mtime,
}

impl SortKey {
    /// Keys whose first click shows the largest value first.
    fn reversed(self) -> bool {
        match self {
            SortKey::Name | SortKey::Size => false,
            SortKey::Mtime => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Mtime => "mtime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOption {
    pub key: SortKey,
    pub descending: bool,
}

impl SortOption {
    pub fn new(key: SortKey, descending: bool) -> Self {
        SortOption { key, descending }
    }
}

/// Sort option per directory; directories never sorted use the default.
#[derive(Debug, Clone, Default)]
pub struct SortPreferences {
    options: HashMap<PathBuf, SortOption>,
}

impl SortPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dir: &Path) -> SortOption {
        self.options.get(dir).copied().unwrap_or_default()
    }

    /// Flips the direction when `key` is already active, otherwise switches
    /// to `key` ascending.
    pub fn toggle(&mut self, dir: &Path, key: SortKey) -> SortOption {
        let current = self.get(dir);
        let descending = current.key == key && !current.descending;
        let option = SortOption::new(key, descending);
        self.options.insert(dir.to_path_buf(), option);
        option
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

fn compare_key(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Mtime => a.mtime.cmp(&b.mtime),
    }
}

pub fn compare(a: &Entry, b: &Entry, option: SortOption) -> Ordering {
    let mut ordering = compare_key(a, b, option.key).then_with(|| a.name.cmp(&b.name));
    if option.key.reversed() {
        ordering = ordering.reverse();
    }
    if option.descending {
        ordering = ordering.reverse();
    }
    ordering
}

pub fn sort_entries(entries: &[Entry], option: SortOption) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| compare(a, b, option));
    sorted
}
