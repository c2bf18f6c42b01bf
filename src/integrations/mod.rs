// src/integrations/mod.rs
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

pub mod shell;

pub use shell::SystemShell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerRequest {
    pub paths: Vec<PathBuf>,
    pub current: Option<PathBuf>,
}

pub trait Viewer {
    fn show(&mut self, request: ViewerRequest);
}

pub trait Shell {
    /// Opens `path` in the platform file manager.
    fn open_path(&self, path: &Path) -> Result<()>;
    fn home_dir(&self) -> Option<PathBuf>;
}

pub trait Notifier {
    fn show(&mut self, message: &str);
}

/// Forwards viewer requests to whoever holds the receiver.
pub struct ChannelViewer(Sender<ViewerRequest>);

impl ChannelViewer {
    pub fn new() -> (Self, Receiver<ViewerRequest>) {
        let (tx, rx) = channel();
        (ChannelViewer(tx), rx)
    }
}

impl Viewer for ChannelViewer {
    fn show(&mut self, request: ViewerRequest) {
        if self.0.send(request).is_err() {
            log::debug!("viewer request dropped, receiver gone");
        }
    }
}

pub struct ChannelNotifier(Sender<String>);

impl ChannelNotifier {
    pub fn new() -> (Self, Receiver<String>) {
        let (tx, rx) = channel();
        (ChannelNotifier(tx), rx)
    }
}

impl Notifier for ChannelNotifier {
    fn show(&mut self, message: &str) {
        if self.0.send(message.to_string()).is_err() {
            log::debug!("message dropped, receiver gone: {}", message);
        }
    }
}

/// Writes messages to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}
