// src/history/mod.rs
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub directory: PathBuf,
    pub scroll_top: usize,
}

impl HistoryRecord {
    pub fn new(directory: PathBuf) -> Self {
        HistoryRecord { directory, scroll_top: 0 }
    }
}

/// Visited directories with a cursor. Pushing from anywhere but the tail
/// drops the records after the cursor.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    records: Vec<HistoryRecord>,
    index: Option<usize>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: HistoryRecord) -> usize {
        let keep = self.index.map_or(0, |i| i + 1);
        self.records.truncate(keep);
        self.records.push(record);
        let index = self.records.len() - 1;
        self.index = Some(index);
        index
    }

    /// Moves the cursor without touching the records.
    pub fn goto(&mut self, index: usize) -> Option<&HistoryRecord> {
        if index >= self.records.len() {
            return None;
        }
        self.index = Some(index);
        self.records.get(index)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        match self.index {
            Some(i) => i + 1 < self.records.len(),
            None => false,
        }
    }

    /// Index `offset + 1` steps back, if it exists.
    pub fn back(&self, offset: usize) -> Option<usize> {
        if !self.can_go_back() {
            return None;
        }
        self.index?.checked_sub(offset.checked_add(1)?)
    }

    /// Index `offset + 1` steps forward, if it exists.
    pub fn forward(&self, offset: usize) -> Option<usize> {
        if !self.can_go_forward() {
            return None;
        }
        let target = self.index?.checked_add(offset)?.checked_add(1)?;
        (target < self.records.len()).then_some(target)
    }

    pub fn update_scroll_top(&mut self, index: usize, scroll_top: usize) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.scroll_top = scroll_top;
                true
            }
            None => false,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    pub fn current(&self) -> Option<&HistoryRecord> {
        self.records.get(self.index?)
    }

    pub fn scroll_top(&self) -> usize {
        self.current().map_or(0, |r| r.scroll_top)
    }

    /// Directories before the cursor, nearest first.
    pub fn back_directories(&self) -> Vec<&Path> {
        let end = self.index.unwrap_or(0);
        self.records[..end].iter().rev().map(|r| r.directory.as_path()).collect()
    }

    /// Directories after the cursor, in order.
    pub fn forward_directories(&self) -> Vec<&Path> {
        let start = self.index.map_or(self.records.len(), |i| i + 1);
        self.records[start..].iter().map(|r| r.directory.as_path()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(dirs: &[&str]) -> HistoryStack {
        let mut stack = HistoryStack::new();
        for dir in dirs {
            stack.push(HistoryRecord::new(PathBuf::from(dir)));
        }
        stack
    }

    #[test]
    fn test_pristine_stack() {
        let stack = HistoryStack::new();
        assert_eq!(stack.index(), None);
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
        assert!(stack.current().is_none());
        assert_eq!(stack.scroll_top(), 0);
        assert!(stack.back_directories().is_empty());
        assert!(stack.forward_directories().is_empty());
    }

    #[test]
    fn test_push_truncates_forward_branch() {
        let mut stack = stack(&["/a", "/b", "/c", "/d"]);
        stack.goto(1).unwrap();
        assert_eq!(stack.forward_directories(), vec![Path::new("/c"), Path::new("/d")]);

        let index = stack.push(HistoryRecord::new(PathBuf::from("/e")));
        assert_eq!(index, 2);
        assert_eq!(stack.len(), 3);
        assert!(stack.forward_directories().is_empty());
        assert_eq!(stack.back_directories(), vec![Path::new("/b"), Path::new("/a")]);
    }

    #[test]
    fn test_goto_out_of_range_is_noop() {
        let mut stack = stack(&["/a", "/b"]);
        assert!(stack.goto(2).is_none());
        assert_eq!(stack.index(), Some(1));
        assert_eq!(stack.goto(0).map(|r| r.directory.clone()), Some(PathBuf::from("/a")));
    }

    #[test]
    fn test_back_then_forward_returns_to_origin() {
        let mut stack = stack(&["/a", "/b", "/c", "/d"]);
        let back = stack.back(1).unwrap();
        assert_eq!(back, 1);
        stack.goto(back);
        let forward = stack.forward(1).unwrap();
        assert_eq!(forward, 3);
        stack.goto(forward);
        assert_eq!(stack.current().unwrap().directory, PathBuf::from("/d"));
    }

    #[test]
    fn test_overshooting_offsets_are_rejected() {
        let mut stack = stack(&["/a", "/b", "/c"]);
        assert_eq!(stack.back(2), None);
        assert_eq!(stack.back(usize::MAX), None);
        stack.goto(0);
        assert_eq!(stack.back(0), None);
        assert_eq!(stack.forward(2), None);
        assert_eq!(stack.forward(usize::MAX), None);
        assert_eq!(stack.forward(1), Some(2));
    }

    #[test]
    fn test_update_scroll_top_keeps_cursor() {
        let mut stack = stack(&["/a", "/b"]);
        assert!(stack.update_scroll_top(0, 42));
        assert!(!stack.update_scroll_top(5, 1));
        assert_eq!(stack.index(), Some(1));
        assert_eq!(stack.get(0).unwrap().scroll_top, 42);
        assert_eq!(stack.scroll_top(), 0);
    }
}
