//! Change notifications sent to session subscribers.

use std::path::PathBuf;

use super::state::ViewOptions;

/// One state change, emitted after the session has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { index: usize, value: String },
    Removed { index: usize, value: String },
    Edited { index: usize, old: String, new: String },
    Cleared,
    /// The whole list was reordered (sorting was switched on).
    Reordered,
    SelectionChanged(Vec<usize>),
    ViewChanged(ViewOptions),
    ClipboardSet { entries: usize },
    Saved { path: PathBuf, entries: usize },
}

/// Callback registered with [`Session::subscribe`](super::Session::subscribe).
pub type Subscriber = Box<dyn FnMut(&Change)>;
