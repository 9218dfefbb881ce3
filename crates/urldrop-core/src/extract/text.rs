//! Plain-text extraction: one candidate per line.

use crate::validate::validate;

/// Trims each line and keeps those that are valid URIs, in input order.
pub fn extract_text<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            validate(trimmed).then(|| trimmed.to_string())
        })
        .collect()
}
