//! Link extraction from plain-text, HTML and Internet-shortcut files.
//!
//! Each file kind has its own extractor; [`FileKind::from_path`] picks one
//! from the extension and [`extract_file`] reads and runs it. All extractors
//! keep links in order of appearance, without sorting or deduplication.

mod html;
mod read;
mod shortcut;
mod text;

pub use html::{extract_html, extract_html_with};
pub use read::read_document;
pub use shortcut::{extract_url_shortcut, extract_url_shortcut_with};
pub use text::extract_text;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ExtractError;

/// Input file kind, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.txt`: one candidate link per line.
    PlainText,
    /// `.htm` / `.html`: `href` of every anchor.
    Html,
    /// `.url`: the `URL=` entry of an `[InternetShortcut]` section.
    InternetShortcut,
}

impl FileKind {
    /// Kind for `path` by case-insensitive extension, or `None` if unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(FileKind::PlainText),
            "htm" | "html" => Some(FileKind::Html),
            "url" => Some(FileKind::InternetShortcut),
            _ => None,
        }
    }

    /// Runs the extractor for this kind over already-read file content.
    pub fn extract(self, content: &str, options: &ExtractOptions) -> Vec<String> {
        match self {
            FileKind::PlainText => extract_text(split_lines(content)),
            FileKind::Html => extract_html_with(content, options),
            FileKind::InternetShortcut => extract_url_shortcut_with(split_lines(content), options),
        }
    }
}

/// Splits on `\r\n`, `\n` and a lone `\r`. A trailing terminator yields one
/// empty line, which no extractor keeps.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
}

/// Switches for the two behaviors whose intent is unclear.
///
/// The defaults reproduce the established behavior: HTML links must contain
/// the letter `a`, and shortcut targets are taken without validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Keep an HTML `href` only if its raw value contains `a`.
    pub html_require_letter_a: bool,
    /// Run the URI validator over the `URL=` value of `.url` files.
    pub validate_shortcuts: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            html_require_letter_a: true,
            validate_shortcuts: false,
        }
    }
}

/// Reads `path` and extracts its links as `kind`.
///
/// The file is opened, fully read and closed before extraction starts.
pub fn extract_file(
    path: &Path,
    kind: FileKind,
    options: &ExtractOptions,
) -> Result<Vec<String>, ExtractError> {
    let content = read_document(path)?;
    Ok(kind.extract(&content, options))
}
