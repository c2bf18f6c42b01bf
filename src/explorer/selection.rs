// src/explorer/selection.rs
use crate::filesystem::Entry;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    First,
    Last,
    Previous,
    Next,
}

pub fn selected_index(items: &[&Entry], selected: Option<&Path>) -> Option<usize> {
    let selected = selected?;
    items.iter().position(|e| e.path == selected)
}

/// Index a move lands on. Moving off either end yields `None`; with nothing
/// selected, `Next` lands on the first item and `Previous` on nothing.
pub fn move_target(len: usize, current: Option<usize>, movement: SelectionMove) -> Option<usize> {
    let target = match movement {
        SelectionMove::First => Some(0),
        SelectionMove::Last => len.checked_sub(1),
        SelectionMove::Previous => current.and_then(|i| i.checked_sub(1)),
        SelectionMove::Next => Some(current.map_or(0, |i| i + 1)),
    }?;
    (target < len).then_some(target)
}
