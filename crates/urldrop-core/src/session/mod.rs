//! Link list session: the single owner of list state.
//!
//! A [`Session`] holds the extracted links, the current selection, view
//! toggles and an internal clipboard. It is changed only through its command
//! methods (or the textual [`command`] table that maps onto them), and every
//! change is reported to subscribers so a display can follow along without
//! ever being the source of truth.

pub mod command;
mod change;
mod error;
mod state;

pub use change::{Change, Subscriber};
pub use command::{lookup, split_args, CommandSpec, Outcome, COMMANDS};
pub use error::SessionError;
pub use state::{SelectionMode, ViewOptions};

use std::path::Path;

use crate::config::UrldropConfig;
use crate::extract::{extract_text, split_lines, ExtractOptions};
use crate::populate::populate;
use crate::storage::save_list;
use crate::validate::validate;

/// List state plus the commands that mutate it.
pub struct Session {
    items: Vec<String>,
    /// Selected indices, ascending and unique.
    selection: Vec<usize>,
    view: ViewOptions,
    extract: ExtractOptions,
    clipboard: Option<String>,
    subscribers: Vec<Subscriber>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ViewOptions::default(), ExtractOptions::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("items", &self.items)
            .field("selection", &self.selection)
            .field("view", &self.view)
            .field("extract", &self.extract)
            .field("clipboard", &self.clipboard)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Session {
    pub fn new(view: ViewOptions, extract: ExtractOptions) -> Self {
        Self {
            items: Vec::new(),
            selection: Vec::new(),
            view,
            extract,
            clipboard: None,
            subscribers: Vec::new(),
        }
    }

    pub fn from_config(cfg: &UrldropConfig) -> Self {
        Self::new(cfg.view_options(), cfg.extract_options())
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn selected_items(&self) -> Vec<&str> {
        self.selection.iter().map(|&i| self.items[i].as_str()).collect()
    }

    pub fn view(&self) -> ViewOptions {
        self.view
    }

    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Registers a callback invoked after every state change.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&Change) + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    fn emit(&mut self, change: Change) {
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Inserts at the end, or at the sorted position when sorting is on.
    fn insert(&mut self, value: String) -> usize {
        let index = if self.view.sorted {
            self.items.partition_point(|x| x.as_str() <= value.as_str())
        } else {
            self.items.len()
        };
        self.items.insert(index, value.clone());
        for s in &mut self.selection {
            if *s >= index {
                *s += 1;
            }
        }
        self.emit(Change::Added { index, value });
        index
    }

    fn remove_at(&mut self, index: usize) -> String {
        let value = self.items.remove(index);
        self.selection.retain(|&s| s != index);
        for s in &mut self.selection {
            if *s > index {
                *s -= 1;
            }
        }
        self.emit(Change::Removed {
            index,
            value: value.clone(),
        });
        value
    }

    /// Extracts links from `paths` and appends them.
    ///
    /// On a read failure the links of the files processed before it are still
    /// added, then the error is returned.
    pub fn open<I, P>(&mut self, paths: I) -> Result<usize, SessionError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut found = Vec::new();
        let result = populate(paths, &self.extract, &mut found);
        let count = found.len();
        for link in found {
            self.insert(link);
        }
        match result {
            Ok(_) => Ok(count),
            Err(e) => {
                tracing::warn!(added = count, "populate stopped early: {}", e);
                Err(e.into())
            }
        }
    }

    /// Appends one link after validating it. Returns its index.
    pub fn add(&mut self, uri: &str) -> Result<usize, SessionError> {
        let uri = uri.trim();
        if !validate(uri) {
            return Err(SessionError::InvalidUri(uri.to_string()));
        }
        Ok(self.insert(uri.to_string()))
    }

    /// Removes the entries at `indices`. All indices are checked first, so an
    /// out-of-range index leaves the list untouched.
    pub fn remove(&mut self, indices: &[usize]) -> Result<usize, SessionError> {
        for &i in indices {
            self.check_index(i)?;
        }
        let mut targets = indices.to_vec();
        targets.sort_unstable();
        targets.dedup();
        for &i in targets.iter().rev() {
            self.remove_at(i);
        }
        Ok(targets.len())
    }

    pub fn remove_selected(&mut self) -> Result<usize, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        let selected = self.selection.clone();
        self.remove(&selected)
    }

    /// Replaces the entry at `index` with a new, valid link. Returns the
    /// entry's index afterwards, which moves when sorting is on.
    pub fn edit(&mut self, index: usize, value: &str) -> Result<usize, SessionError> {
        self.check_index(index)?;
        let value = value.trim();
        if !validate(value) {
            return Err(SessionError::InvalidUri(value.to_string()));
        }

        if self.view.sorted {
            let was_selected = self.selection.contains(&index);
            self.remove_at(index);
            let new_index = self.insert(value.to_string());
            if was_selected {
                self.selection.push(new_index);
                self.selection.sort_unstable();
                self.emit(Change::SelectionChanged(self.selection.clone()));
            }
            return Ok(new_index);
        }

        let old = std::mem::replace(&mut self.items[index], value.to_string());
        self.emit(Change::Edited {
            index,
            old,
            new: value.to_string(),
        });
        Ok(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selection.clear();
        self.emit(Change::Cleared);
    }

    /// Replaces the selection, subject to the current selection mode.
    pub fn select(&mut self, indices: &[usize]) -> Result<(), SessionError> {
        for &i in indices {
            self.check_index(i)?;
        }
        let mut selection = indices.to_vec();
        selection.sort_unstable();
        selection.dedup();

        let mode = self.view.selection_mode;
        if selection.len() > mode.max_selected() {
            return Err(SessionError::SelectionNotAllowed {
                mode,
                count: selection.len(),
            });
        }
        self.selection = selection;
        self.emit(Change::SelectionChanged(self.selection.clone()));
        Ok(())
    }

    /// Copies the selected entries, newline-joined, to the clipboard.
    pub fn copy(&mut self) -> Result<usize, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        let entries = self.selection.len();
        self.clipboard = Some(self.selected_items().join("\n"));
        self.emit(Change::ClipboardSet { entries });
        Ok(entries)
    }

    pub fn cut(&mut self) -> Result<usize, SessionError> {
        let entries = self.copy()?;
        self.remove_selected()?;
        Ok(entries)
    }

    /// Appends every valid link found in the clipboard text.
    pub fn paste(&mut self) -> usize {
        let Some(text) = self.clipboard.clone() else {
            return 0;
        };
        let links = extract_text(split_lines(&text));
        let count = links.len();
        for link in links {
            self.insert(link);
        }
        count
    }

    /// Turns sorting on or off. Switching it on sorts the list immediately;
    /// selected entries stay selected.
    pub fn set_sorted(&mut self, sorted: bool) {
        if self.view.sorted == sorted {
            return;
        }
        self.view.sorted = sorted;

        if sorted && !self.items.is_empty() {
            let mut order: Vec<usize> = (0..self.items.len()).collect();
            order.sort_by(|&a, &b| self.items[a].cmp(&self.items[b]));

            let mut new_pos = vec![0; order.len()];
            for (pos, &old) in order.iter().enumerate() {
                new_pos[old] = pos;
            }
            let items = std::mem::take(&mut self.items);
            let mut slots: Vec<Option<String>> = items.into_iter().map(Some).collect();
            self.items = order.iter().filter_map(|&old| slots[old].take()).collect();

            for s in &mut self.selection {
                *s = new_pos[*s];
            }
            self.selection.sort_unstable();

            self.emit(Change::Reordered);
            if !self.selection.is_empty() {
                self.emit(Change::SelectionChanged(self.selection.clone()));
            }
        }
        self.emit(Change::ViewChanged(self.view));
    }

    pub fn set_topmost(&mut self, topmost: bool) {
        if self.view.topmost == topmost {
            return;
        }
        self.view.topmost = topmost;
        self.emit(Change::ViewChanged(self.view));
    }

    /// Changes the selection mode, trimming the selection to what it allows.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.view.selection_mode = mode;
        let max = mode.max_selected();
        if self.selection.len() > max {
            self.selection.truncate(max);
            self.emit(Change::SelectionChanged(self.selection.clone()));
        }
        self.emit(Change::ViewChanged(self.view));
    }

    /// Writes the list to `path`, one link per line.
    pub fn save(&mut self, path: &Path) -> Result<(), SessionError> {
        save_list(path, &self.items)?;
        self.emit(Change::Saved {
            path: path.to_path_buf(),
            entries: self.items.len(),
        });
        Ok(())
    }
}
