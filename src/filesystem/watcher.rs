// src/filesystem/watcher.rs
use crate::error::Result;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// A single live watch on one directory.
pub trait DirectoryWatch {
    /// Watches `dir`, closing whatever was watched before.
    fn watch(&mut self, dir: &Path) -> Result<()>;
    fn unwatch(&mut self);
    fn watched(&self) -> Option<&Path>;
    /// Drains queued notifications and returns how many reported a change.
    fn pending_changes(&mut self) -> usize;
}

pub struct DirectoryWatcher {
    watcher: Option<RecommendedWatcher>,
    watched: Option<PathBuf>,
    tx: Sender<notify::Result<Event>>,
    rx: Receiver<notify::Result<Event>>,
}

impl DirectoryWatcher {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        DirectoryWatcher { watcher: None, watched: None, tx, rx }
    }

    fn drain(&mut self) -> usize {
        let mut changes = 0;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(event) if is_change(&event) => changes += 1,
                Ok(_) => {}
                Err(e) => log::warn!("watch error: {}", e),
            }
        }
        changes
    }
}

impl Default for DirectoryWatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_change(event: &Event) -> bool {
    !matches!(event.kind, EventKind::Access(_))
}

impl DirectoryWatch for DirectoryWatcher {
    fn watch(&mut self, dir: &Path) -> Result<()> {
        self.unwatch();

        let tx = self.tx.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        log::debug!("watching {}", dir.display());

        self.watcher = Some(watcher);
        self.watched = Some(dir.to_path_buf());
        Ok(())
    }

    fn unwatch(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            if let Some(path) = self.watched.as_deref() {
                if let Err(e) = watcher.unwatch(path) {
                    log::debug!("unwatch {} failed: {}", path.display(), e);
                }
            }
        }
        self.watched = None;
        // Events queued by the closed watch no longer describe the current directory.
        self.drain();
    }

    fn watched(&self) -> Option<&Path> {
        self.watched.as_deref()
    }

    fn pending_changes(&mut self) -> usize {
        if self.watcher.is_none() {
            return 0;
        }
        self.drain()
    }
}

impl Drop for DirectoryWatcher {
    fn drop(&mut self) {
        self.unwatch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rearm_replaces_previous_watch() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new();

        watcher.watch(a.path()).unwrap();
        assert_eq!(watcher.watched(), Some(a.path()));
        watcher.watch(b.path()).unwrap();
        assert_eq!(watcher.watched(), Some(b.path()));

        watcher.unwatch();
        assert_eq!(watcher.watched(), None);
        watcher.unwatch();
        assert_eq!(watcher.pending_changes(), 0);
    }

    fn wait_for_changes(watcher: &mut DirectoryWatcher) -> usize {
        for _ in 0..50 {
            let changes = watcher.pending_changes();
            if changes > 0 {
                return changes;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        0
    }

    #[test]
    fn test_mutation_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new();
        watcher.watch(dir.path()).unwrap();
        assert_eq!(watcher.pending_changes(), 0);

        std::fs::write(dir.path().join("new.png"), b"png").unwrap();
        assert!(wait_for_changes(&mut watcher) > 0);
    }

    #[test]
    fn test_rearm_drops_events_of_closed_watch() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new();
        watcher.watch(a.path()).unwrap();

        std::fs::write(a.path().join("new.png"), b"png").unwrap();
        std::thread::sleep(Duration::from_millis(300));
        watcher.watch(b.path()).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(watcher.pending_changes(), 0);
    }

    #[test]
    fn test_watch_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new();
        assert!(watcher.watch(&root.path().join("gone")).is_err());
        assert_eq!(watcher.watched(), None);
    }

    #[test]
    fn test_access_events_are_not_changes() {
        use notify::event::{AccessKind, CreateKind};
        assert!(!is_change(&Event::new(EventKind::Access(AccessKind::Any))));
        assert!(is_change(&Event::new(EventKind::Create(CreateKind::File))));
    }
}
