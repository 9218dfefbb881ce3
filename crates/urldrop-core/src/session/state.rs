//! View options and selection mode of a session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many entries may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Nothing can be selected.
    None,
    /// At most one entry.
    #[default]
    One,
    /// Any number of entries, toggled individually.
    MultiSimple,
    /// Any number of entries, including ranges.
    MultiExtended,
}

impl SelectionMode {
    /// Largest selection the mode allows.
    pub fn max_selected(self) -> usize {
        match self {
            SelectionMode::None => 0,
            SelectionMode::One => 1,
            SelectionMode::MultiSimple | SelectionMode::MultiExtended => usize::MAX,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionMode::None => "none",
            SelectionMode::One => "one",
            SelectionMode::MultiSimple => "multi-simple",
            SelectionMode::MultiExtended => "multi-extended",
        };
        f.write_str(s)
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SelectionMode::None),
            "one" => Ok(SelectionMode::One),
            "multi-simple" | "multisimple" => Ok(SelectionMode::MultiSimple),
            "multi-extended" | "multiextended" => Ok(SelectionMode::MultiExtended),
            other => Err(format!("unknown selection mode: {other}")),
        }
    }
}

/// Display toggles that are not part of the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    /// Keep the list in lexicographic order.
    pub sorted: bool,
    /// Keep the window above others. Carried for the display layer only.
    pub topmost: bool,
    pub selection_mode: SelectionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_mode_parse_and_display() {
        for mode in [
            SelectionMode::None,
            SelectionMode::One,
            SelectionMode::MultiSimple,
            SelectionMode::MultiExtended,
        ] {
            assert_eq!(mode.to_string().parse::<SelectionMode>().unwrap(), mode);
        }
        assert_eq!("MultiSimple".parse::<SelectionMode>().unwrap(), SelectionMode::MultiSimple);
        assert!("many".parse::<SelectionMode>().is_err());
    }

    #[test]
    fn default_view_options() {
        let v = ViewOptions::default();
        assert!(!v.sorted);
        assert!(!v.topmost);
        assert_eq!(v.selection_mode, SelectionMode::One);
    }
}
