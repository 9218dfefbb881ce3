//! Internet-shortcut (`.url`) extraction.

use super::ExtractOptions;
use crate::validate::validate;

const URL_KEY: &str = "URL=";

/// Returns the target of the first `URL=` line, or an empty list.
///
/// The value is everything after the first `=`; it is not validated.
pub fn extract_url_shortcut<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_url_shortcut_with(lines, &ExtractOptions::default())
}

/// Like [`extract_url_shortcut`], validating the target when
/// `options.validate_shortcuts` is set. Scanning still stops at the first
/// `URL=` line, so an invalid first entry yields an empty list.
pub fn extract_url_shortcut_with<I, S>(lines: I, options: &ExtractOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .find_map(|line| shortcut_target(line.as_ref()).map(str::to_string))
        .filter(|link| !options.validate_shortcuts || validate(link))
        .into_iter()
        .collect()
}

fn shortcut_target(line: &str) -> Option<&str> {
    let key = line.get(..URL_KEY.len())?;
    if !key.eq_ignore_ascii_case(URL_KEY) {
        return None;
    }
    line.split_once('=').map(|(_, value)| value)
}
