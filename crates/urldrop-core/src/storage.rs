//! Saving a link list as plain text.
//!
//! The list is written to a `.part` file next to the target and renamed over
//! it, so a failed write never leaves a truncated list behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `links.txt` → `links.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Newline-joined rendering of `links`, as written by [`save_list`].
pub fn render_list(links: &[String]) -> String {
    links.join("\n")
}

/// Writes `links` to `path`, one per line, replacing any existing file.
pub fn save_list(path: &Path, links: &[String]) -> Result<(), ExtractError> {
    let write_err = |source: std::io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let temp = temp_path(path);
    fs::write(&temp, render_list(links)).map_err(write_err)?;
    if let Err(e) = fs::rename(&temp, path) {
        if let Err(cleanup) = fs::remove_file(&temp) {
            tracing::debug!(path = %temp.display(), "could not remove temp file: {}", cleanup);
        }
        return Err(write_err(e));
    }

    tracing::info!(path = %path.display(), count = links.len(), "saved link list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_text, read_document};

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("links.txt"));
        assert_eq!(p.to_string_lossy(), "links.txt.part");
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer than the new one").unwrap();

        save_list(&path, &["http://a.com".to_string(), "http://b.com".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "http://a.com\nhttp://b.com");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn save_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let links: Vec<String> = [
            "https://z.example/last",
            "mailto:a@b.com",
            "ftp://files.example.org/pub",
            "https://z.example/last",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        save_list(&path, &links).unwrap();
        let reloaded = extract_text(read_document(&path).unwrap().lines());
        assert_eq!(reloaded, links);
    }

    #[test]
    fn save_empty_list_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        save_list(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn save_into_missing_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        match save_list(&path, &["http://a.com".to_string()]) {
            Err(ExtractError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
