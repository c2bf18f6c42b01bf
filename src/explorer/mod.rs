// src/explorer/mod.rs
pub mod controller;
pub mod filter;
pub mod selection;
pub mod sort;

pub use controller::{Collaborators, NavigationController, NoWatch};
pub use filter::filter_entries;
pub use selection::SelectionMove;
pub use sort::{sort_entries, SortKey, SortOption, SortPreferences};
