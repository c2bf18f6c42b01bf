// src/explorer/controller.rs
use super::filter::filter_entries;
use super::selection::{move_target, selected_index, SelectionMove};
use super::sort::{sort_entries, SortKey, SortOption, SortPreferences};
use crate::config::ExplorerConfig;
use crate::filesystem::{DirListing, DirectoryWatch, DirectoryWatcher, Entry, Listing};
use crate::history::{HistoryRecord, HistoryStack};
use crate::integrations::{Notifier, Shell, SystemShell, Viewer, ViewerRequest};
use std::path::{Path, PathBuf};

/// Everything the controller talks to outside of its own state.
pub struct Collaborators {
    pub listing: Box<dyn Listing>,
    pub watcher: Box<dyn DirectoryWatch>,
    pub viewer: Box<dyn Viewer>,
    pub shell: Box<dyn Shell>,
    pub notifier: Box<dyn Notifier>,
}

impl Collaborators {
    pub fn system(config: &ExplorerConfig, viewer: Box<dyn Viewer>, notifier: Box<dyn Notifier>) -> Self {
        let watcher: Box<dyn DirectoryWatch> = if config.watch {
            Box::new(DirectoryWatcher::new())
        } else {
            Box::new(NoWatch::default())
        };
        Collaborators {
            listing: Box::new(DirListing::new(config)),
            watcher,
            viewer,
            shell: Box::new(SystemShell::new()),
            notifier,
        }
    }
}

/// Stand-in used when watching is disabled.
#[derive(Debug, Default)]
pub struct NoWatch {
    watched: Option<PathBuf>,
}

impl DirectoryWatch for NoWatch {
    fn watch(&mut self, dir: &Path) -> crate::error::Result<()> {
        self.watched = Some(dir.to_path_buf());
        Ok(())
    }

    fn unwatch(&mut self) {
        self.watched = None;
    }

    fn watched(&self) -> Option<&Path> {
        self.watched.as_deref()
    }

    fn pending_changes(&mut self) -> usize {
        0
    }
}

pub struct NavigationController {
    directory: PathBuf,
    directory_input: String,
    items: Vec<Entry>,
    query: String,
    query_input: String,
    selected: Option<PathBuf>,
    history: HistoryStack,
    sort_options: SortPreferences,
    focus_requested: bool,
    services: Collaborators,
}

impl NavigationController {
    pub fn new(directory: PathBuf, services: Collaborators) -> Self {
        let directory_input = directory.display().to_string();
        NavigationController {
            directory,
            directory_input,
            items: Vec::new(),
            query: String::new(),
            query_input: String::new(),
            selected: None,
            history: HistoryStack::new(),
            sort_options: SortPreferences::new(),
            focus_requested: false,
            services,
        }
    }

    // --- Read access ---

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn directory_input(&self) -> &str {
        &self.directory_input
    }

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn sort_preferences(&self) -> &SortPreferences {
        &self.sort_options
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_options.get(&self.directory)
    }

    pub fn filtered_items(&self) -> Vec<&Entry> {
        filter_entries(&self.items, &self.query)
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        selected_index(&self.filtered_items(), self.selected_path())
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selected_path() == Some(path)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn scroll_top(&self) -> usize {
        self.history.scroll_top()
    }

    pub fn watched(&self) -> Option<&Path> {
        self.services.watcher.watched()
    }

    /// Returns true once after each reload.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // --- Navigation ---

    pub fn init_directory(&mut self) {
        let dir = self.directory.clone();
        self.change_directory(dir, true);
    }

    pub fn change_directory(&mut self, dir: PathBuf, force: bool) {
        if dir == self.directory && !force {
            return;
        }
        log::debug!("change directory to {}", dir.display());
        self.selected = None;
        let index = self.history.push(HistoryRecord::new(dir));
        self.restore(index);
    }

    pub fn change_parent_directory(&mut self) {
        let parent = self.directory.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            let parent = parent.to_path_buf();
            self.change_directory(parent, false);
        }
    }

    pub fn change_home_directory(&mut self) {
        match self.services.shell.home_dir() {
            Some(home) => self.change_directory(home, false),
            None => log::warn!("home directory is unknown"),
        }
    }

    pub fn change_selected_directory(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        if self.services.listing.is_dir(&selected) {
            self.change_directory(selected, false);
        }
    }

    pub fn back_directory(&mut self, offset: usize) {
        if let Some(index) = self.history.back(offset) {
            self.restore(index);
        }
    }

    pub fn forward_directory(&mut self, offset: usize) {
        if let Some(index) = self.history.forward(offset) {
            self.restore(index);
        }
    }

    pub fn restore(&mut self, index: usize) {
        let Some(record) = self.history.goto(index) else {
            return;
        };
        self.directory = record.directory.clone();
        self.directory_input = self.directory.display().to_string();
        self.query.clear();
        self.query_input.clear();
        self.reload();
    }

    /// Re-arms the watch on the current directory and lists it again.
    pub fn reload(&mut self) {
        let items = match self.services.watcher.watch(&self.directory) {
            Ok(()) => match self.services.listing.list(&self.directory, false) {
                Ok(entries) => entries.into_iter().filter(Entry::is_listable).collect(),
                Err(e) => {
                    log::warn!("cannot list {}: {}", self.directory.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                log::warn!("cannot watch {}: {}", self.directory.display(), e);
                Vec::new()
            }
        };
        self.items = items;
        self.sort();
        self.focus_requested = true;
    }

    /// Reloads once if the watch reported any change since the last call.
    pub fn process_watch_events(&mut self) -> bool {
        let changes = self.services.watcher.pending_changes();
        if changes == 0 {
            return false;
        }
        log::debug!("{} change(s) in {}, reloading", changes, self.directory.display());
        self.reload();
        true
    }

    pub fn set_directory_input(&mut self, input: impl Into<String>) {
        self.directory_input = input.into();
    }

    pub fn submit_directory_input(&mut self) {
        let input = self.directory_input.trim();
        if input.is_empty() {
            return;
        }
        let dir = PathBuf::from(input);
        self.change_directory(dir, false);
    }

    pub fn open_current_directory(&mut self) {
        if let Err(e) = self.services.shell.open_path(&self.directory) {
            log::warn!("cannot open {}: {}", self.directory.display(), e);
            let message = format!("Invalid directory \"{}\"", self.directory.display());
            self.services.notifier.show(&message);
        }
    }

    pub fn activate(&mut self, path: &Path) {
        if self.services.listing.is_dir(path) {
            self.change_directory(path.to_path_buf(), false);
        } else {
            self.show_in_viewer(path);
        }
    }

    pub fn activate_selected(&mut self) {
        if let Some(selected) = self.selected.clone() {
            self.activate(&selected);
        }
    }

    pub fn show_in_viewer(&mut self, path: &Path) {
        let request = if self.services.listing.is_dir(path) {
            self.list_paths(path, true).map(|paths| ViewerRequest { paths, current: None })
        } else {
            let parent = path.parent().unwrap_or(path);
            self.list_paths(parent, false).map(|paths| ViewerRequest {
                paths,
                current: Some(path.to_path_buf()),
            })
        };
        if let Some(request) = request {
            self.services.viewer.show(request);
        }
    }

    fn list_paths(&self, dir: &Path, recursive: bool) -> Option<Vec<PathBuf>> {
        match self.services.listing.list(dir, recursive) {
            Ok(entries) => Some(entries.into_iter().filter(|e| e.is_image).map(|e| e.path).collect()),
            Err(e) => {
                log::warn!("cannot list {} for viewer: {}", dir.display(), e);
                None
            }
        }
    }

    // --- Query, scroll and sort ---

    pub fn set_query_input(&mut self, input: impl Into<String>) {
        self.query_input = input.into();
    }

    pub fn search(&mut self) {
        self.query = self.query_input.clone();
    }

    pub fn set_scroll_top(&mut self, scroll_top: usize) {
        if let Some(index) = self.history.index() {
            self.history.update_scroll_top(index, scroll_top);
        }
    }

    pub fn change_sort_key(&mut self, key: SortKey) {
        self.sort_options.toggle(&self.directory, key);
        self.sort();
    }

    pub fn sort(&mut self) {
        self.items = sort_entries(&self.items, self.sort_option());
    }

    // --- Selection ---

    pub fn select(&mut self, path: Option<PathBuf>) {
        self.selected = path;
    }

    pub fn select_index(&mut self, index: usize) {
        let path = self.filtered_items().get(index).map(|e| e.path.clone());
        if let Some(path) = path {
            self.selected = Some(path);
        }
    }

    pub fn move_selection(&mut self, movement: SelectionMove) {
        let len = self.filtered_items().len();
        if let Some(index) = move_target(len, self.selected_index(), movement) {
            self.select_index(index);
        }
    }

    pub fn select_first(&mut self) {
        self.move_selection(SelectionMove::First);
    }

    pub fn select_last(&mut self) {
        self.move_selection(SelectionMove::Last);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(SelectionMove::Previous);
    }

    pub fn select_next(&mut self) {
        self.move_selection(SelectionMove::Next);
    }

    pub fn shutdown(&mut self) {
        self.services.watcher.unwatch();
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
