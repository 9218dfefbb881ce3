//! `urldrop extract <files>...` – print (and optionally save) the links found in files.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use urldrop_core::storage::save_list;
use urldrop_core::{populate, ExtractOptions};

#[derive(Debug)]
pub struct ExtractArgs<'a> {
    pub files: &'a [PathBuf],
    pub output: Option<&'a Path>,
    pub sort: bool,
    pub json: bool,
    pub options: ExtractOptions,
}

pub fn run_extract(args: &ExtractArgs<'_>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract_to(args, &mut out)
}

/// Links gathered before a failing file are still printed and saved; the
/// failure is returned afterwards.
pub(crate) fn extract_to<W: Write>(args: &ExtractArgs<'_>, out: &mut W) -> Result<()> {
    let mut links = Vec::new();
    let populated = populate(args.files, &args.options, &mut links);
    if args.sort {
        links.sort();
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &links)?;
        writeln!(out)?;
    } else {
        for link in &links {
            writeln!(out, "{link}")?;
        }
    }

    if let Some(path) = args.output {
        save_list(path, &links).context("save link list")?;
        tracing::debug!(path = %path.display(), "saved {} links", links.len());
    }

    populated.context("populate by file(s): could not finish operation")?;
    Ok(())
}
