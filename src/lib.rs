// src/lib.rs
pub mod config;
pub mod error;
pub mod explorer;
pub mod filesystem;
pub mod history;
pub mod integrations;

pub use config::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use explorer::{Collaborators, NavigationController};
