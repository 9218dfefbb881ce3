//! `urldrop shell [files]...` – interactive list session.
//!
//! Each input line is run through the session command table. The session
//! reports its changes to a subscriber; this loop renders them after every
//! command, so the printed view always follows the session state.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::rc::Rc;
use urldrop_core::config::UrldropConfig;
use urldrop_core::session::{Change, Outcome, Session};

pub fn run_shell(cfg: &UrldropConfig, files: &[PathBuf]) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let stdout = io::stdout();
    shell_loop(
        Session::from_config(cfg),
        files,
        stdin.lock(),
        stdout.lock(),
        prompt,
    )
}

pub(crate) fn shell_loop<R: BufRead, W: Write>(
    mut session: Session,
    files: &[PathBuf],
    input: R,
    mut out: W,
    prompt: bool,
) -> Result<()> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    session.subscribe(move |c| sink.borrow_mut().push(c.clone()));

    if !files.is_empty() {
        let opened = session.open(files);
        render_changes(&changes, &mut out)?;
        if let Err(e) = opened {
            writeln!(out, "error: populate by file(s): could not finish operation: {e}")?;
        }
    }

    show_prompt(&mut out, prompt)?;
    for line in input.lines() {
        let line = line.context("read command")?;
        let result = session.execute(&line);
        render_changes(&changes, &mut out)?;

        match result {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Done) => {}
            Ok(Outcome::Message(msg)) => writeln!(out, "{msg}")?,
            Ok(Outcome::Lines(lines)) => {
                for l in lines {
                    writeln!(out, "{l}")?;
                }
            }
            Err(e) => {
                tracing::warn!(command = %line.trim(), "{}", e);
                writeln!(out, "error: {e}")?;
            }
        }
        show_prompt(&mut out, prompt)?;
    }

    tracing::debug!(entries = session.items().len(), "shell session ended");
    Ok(())
}

fn show_prompt<W: Write>(out: &mut W, prompt: bool) -> io::Result<()> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn render_changes<W: Write>(changes: &RefCell<Vec<Change>>, out: &mut W) -> io::Result<()> {
    for change in changes.borrow_mut().drain(..) {
        match change {
            Change::Added { index, value } => writeln!(out, "+ [{index}] {value}")?,
            Change::Removed { index, value } => writeln!(out, "- [{index}] {value}")?,
            Change::Edited { index, new, .. } => writeln!(out, "~ [{index}] {new}")?,
            Change::Cleared => writeln!(out, "list cleared")?,
            Change::Reordered => writeln!(out, "list sorted")?,
            Change::SelectionChanged(sel) => writeln!(out, "selected: {sel:?}")?,
            Change::ViewChanged(v) => writeln!(
                out,
                "view: sorted={} topmost={} mode={}",
                v.sorted, v.topmost, v.selection_mode
            )?,
            // Reported by the command's own message.
            Change::ClipboardSet { .. } | Change::Saved { .. } => {}
        }
    }
    Ok(())
}
