// src/integrations/shell.rs
use super::Shell;
use crate::error::{ExplorerError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["explorer"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "gio", "open"];

/// Opens directories with the platform's file manager.
#[derive(Debug, Default)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        SystemShell
    }

    fn opener(&self) -> Result<PathBuf> {
        OPENERS.iter()
            .find_map(|name| which::which(name).ok())
            .ok_or(ExplorerError::NoOpener)
    }
}

impl Shell for SystemShell {
    fn open_path(&self, path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(ExplorerError::InvalidDirectory(path.to_path_buf()));
        }
        let opener = self.opener()?;
        let mut command = Command::new(&opener);
        if opener.file_stem().is_some_and(|s| s == "gio") {
            command.arg("open");
        }
        command.arg(path).spawn()?;
        Ok(())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}
