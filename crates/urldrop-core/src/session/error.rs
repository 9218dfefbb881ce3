//! Session command errors.

use thiserror::Error;

use super::state::SelectionMode;
use crate::error::ExtractError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("selection mode {mode} does not allow selecting {count} entries")]
    SelectionNotAllowed { mode: SelectionMode, count: usize },
    #[error("nothing selected")]
    EmptySelection,
    #[error("not a valid URI: {0}")]
    InvalidUri(String),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
