//! `urldrop validate <candidates>...` – report which strings are accepted URIs.

use anyhow::Result;
use std::io::{self, Write};
use urldrop_core::validate;

pub fn run_validate(candidates: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let invalid = report_validity(candidates, &mut out)?;
    if invalid > 0 {
        anyhow::bail!(
            "{invalid} of {} candidates are not accepted URIs",
            candidates.len()
        );
    }
    Ok(())
}

/// Writes `valid`/`invalid` per candidate and returns the number rejected.
pub(crate) fn report_validity<W: Write>(candidates: &[String], out: &mut W) -> Result<usize> {
    let mut invalid = 0;
    for candidate in candidates {
        let verdict = if validate(candidate) {
            "valid"
        } else {
            invalid += 1;
            "invalid"
        };
        writeln!(out, "{verdict}\t{candidate}")?;
    }
    Ok(invalid)
}
