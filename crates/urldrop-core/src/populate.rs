//! Batch population: dispatch each input file to its extractor.

use std::path::Path;

use crate::error::ExtractError;
use crate::extract::{extract_file, ExtractOptions, FileKind};

/// Appends the links of every supported file in `paths` to `links`.
///
/// Files are processed in order and their links appended file by file.
/// Unsupported extensions are skipped. The first read failure stops the batch:
/// links from files already processed stay in `links` and the remaining files
/// are not attempted.
///
/// Returns the number of links appended.
pub fn populate<I, P>(
    paths: I,
    options: &ExtractOptions,
    links: &mut Vec<String>,
) -> Result<usize, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let start = links.len();
    for path in paths {
        let path = path.as_ref();
        let Some(kind) = FileKind::from_path(path) else {
            tracing::debug!(path = %path.display(), "skipping unsupported file");
            continue;
        };
        let found = extract_file(path, kind, options)?;
        tracing::debug!(path = %path.display(), ?kind, count = found.len(), "extracted links");
        links.extend(found);
    }
    Ok(links.len() - start)
}
