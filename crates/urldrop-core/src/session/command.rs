//! Command table: textual commands mapped onto [`Session`] operations.
//!
//! Each entry pairs a command name with its handler; `Session::execute`
//! tokenizes a line, looks the name up and calls the handler. Argument
//! checking lives in [`Args`] so handlers stay one-liners where possible.

use std::path::Path;

use super::{Session, SessionError};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report beyond the emitted changes.
    Done,
    /// One-line summary for the user.
    Message(String),
    /// Multi-line output (`list`, `help`).
    Lines(Vec<String>),
    /// The caller should end the session loop.
    Quit,
}

type Handler = fn(&mut Session, &Args<'_>) -> Result<Outcome, SessionError>;

/// One row of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    handler: Handler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish()
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "open",
        usage: "open <file>...",
        summary: "extract links from .txt/.htm/.html/.url files and append them",
        handler: cmd_open,
    },
    CommandSpec {
        name: "add",
        usage: "add <uri>",
        summary: "append one link",
        handler: cmd_add,
    },
    CommandSpec {
        name: "remove",
        usage: "remove [index]...",
        summary: "remove entries by index, or the selection",
        handler: cmd_remove,
    },
    CommandSpec {
        name: "edit",
        usage: "edit <index> <uri>",
        summary: "replace one entry",
        handler: cmd_edit,
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        summary: "empty the list",
        handler: cmd_clear,
    },
    CommandSpec {
        name: "new",
        usage: "new",
        summary: "start a new, empty list",
        handler: cmd_clear,
    },
    CommandSpec {
        name: "select",
        usage: "select [index]...",
        summary: "set the selection (no indices clears it)",
        handler: cmd_select,
    },
    CommandSpec {
        name: "copy",
        usage: "copy",
        summary: "copy the selection to the clipboard",
        handler: cmd_copy,
    },
    CommandSpec {
        name: "cut",
        usage: "cut",
        summary: "copy the selection to the clipboard and remove it",
        handler: cmd_cut,
    },
    CommandSpec {
        name: "paste",
        usage: "paste",
        summary: "append the valid links held in the clipboard",
        handler: cmd_paste,
    },
    CommandSpec {
        name: "sort",
        usage: "sort on|off",
        summary: "keep the list sorted",
        handler: cmd_sort,
    },
    CommandSpec {
        name: "topmost",
        usage: "topmost on|off",
        summary: "keep the window above others",
        handler: cmd_topmost,
    },
    CommandSpec {
        name: "mode",
        usage: "mode none|one|multi-simple|multi-extended",
        summary: "set the selection mode",
        handler: cmd_mode,
    },
    CommandSpec {
        name: "save",
        usage: "save <file>",
        summary: "write the list, one link per line",
        handler: cmd_save,
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "show the list (* marks selected entries)",
        handler: cmd_list,
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "show this help",
        handler: cmd_help,
    },
    CommandSpec {
        name: "quit",
        usage: "quit",
        summary: "leave the session",
        handler: cmd_quit,
    },
];

/// Finds a command by name, ignoring case.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Splits a command line on whitespace; double quotes group words, so paths
/// with spaces can be passed as `"My Links.txt"`.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        args.push(current);
    }
    args
}

impl Session {
    /// Runs one textual command through the command table.
    ///
    /// Blank lines and lines starting with `#` do nothing.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Outcome::Done);
        }

        let words = split_args(trimmed);
        let Some((name, rest)) = words.split_first() else {
            return Ok(Outcome::Done);
        };
        let spec = lookup(name).ok_or_else(|| SessionError::UnknownCommand(name.clone()))?;
        tracing::debug!(command = spec.name, args = ?rest, "session command");
        (spec.handler)(
            self,
            &Args {
                usage: spec.usage,
                values: rest,
            },
        )
    }
}

/// Arguments of one command, with the usage line for error reporting.
pub struct Args<'a> {
    usage: &'static str,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn usage_error(&self) -> SessionError {
        SessionError::Usage(self.usage)
    }

    fn none(&self) -> Result<(), SessionError> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(self.usage_error())
        }
    }

    fn exactly(&self, n: usize) -> Result<&'a [String], SessionError> {
        if self.values.len() == n {
            Ok(self.values)
        } else {
            Err(self.usage_error())
        }
    }

    fn at_least(&self, n: usize) -> Result<&'a [String], SessionError> {
        if self.values.len() >= n {
            Ok(self.values)
        } else {
            Err(self.usage_error())
        }
    }

    fn indices(&self) -> Result<Vec<usize>, SessionError> {
        self.values.iter().map(|v| parse_index(v)).collect()
    }

    fn toggle(&self) -> Result<bool, SessionError> {
        match self.exactly(1)?[0].to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(self.usage_error()),
        }
    }
}

fn parse_index(s: &str) -> Result<usize, SessionError> {
    s.parse()
        .map_err(|_| SessionError::InvalidIndex(s.to_string()))
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "link"
    } else {
        "links"
    }
}

fn cmd_open(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let files = args.at_least(1)?;
    let n = session.open(files.iter().map(Path::new))?;
    Ok(Outcome::Message(format!("added {n} {}", plural(n))))
}

fn cmd_add(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let index = session.add(&args.exactly(1)?[0])?;
    Ok(Outcome::Message(format!("added at {index}")))
}

fn cmd_remove(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let n = if args.values.is_empty() {
        session.remove_selected()?
    } else {
        session.remove(&args.indices()?)?
    };
    Ok(Outcome::Message(format!("removed {n} {}", plural(n))))
}

fn cmd_edit(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let values = args.exactly(2)?;
    let index = parse_index(&values[0])?;
    let new_index = session.edit(index, &values[1])?;
    Ok(Outcome::Message(format!("edited entry now at {new_index}")))
}

fn cmd_clear(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    session.clear();
    Ok(Outcome::Done)
}

fn cmd_select(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    session.select(&args.indices()?)?;
    Ok(Outcome::Done)
}

fn cmd_copy(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    let n = session.copy()?;
    Ok(Outcome::Message(format!("copied {n} {}", plural(n))))
}

fn cmd_cut(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    let n = session.cut()?;
    Ok(Outcome::Message(format!("cut {n} {}", plural(n))))
}

fn cmd_paste(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    let n = session.paste();
    Ok(Outcome::Message(format!("pasted {n} {}", plural(n))))
}

fn cmd_sort(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    session.set_sorted(args.toggle()?);
    Ok(Outcome::Done)
}

fn cmd_topmost(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    session.set_topmost(args.toggle()?);
    Ok(Outcome::Done)
}

fn cmd_mode(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let mode = args.exactly(1)?[0]
        .parse()
        .map_err(|_| args.usage_error())?;
    session.set_selection_mode(mode);
    Ok(Outcome::Done)
}

fn cmd_save(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    let path = Path::new(&args.exactly(1)?[0]);
    session.save(path)?;
    let n = session.items().len();
    Ok(Outcome::Message(format!(
        "saved {n} {} to {}",
        plural(n),
        path.display()
    )))
}

fn cmd_list(session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    let selection = session.selection();
    let lines = session
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mark = if selection.binary_search(&i).is_ok() {
                '*'
            } else {
                ' '
            };
            format!("{mark}{i:>4}  {item}")
        })
        .collect();
    Ok(Outcome::Lines(lines))
}

fn cmd_help(_session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    let lines = COMMANDS
        .iter()
        .map(|c| format!("{:<44} {}", c.usage, c.summary))
        .collect();
    Ok(Outcome::Lines(lines))
}

fn cmd_quit(_session: &mut Session, args: &Args<'_>) -> Result<Outcome, SessionError> {
    args.none()?;
    Ok(Outcome::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_args_handles_quotes() {
        assert_eq!(split_args("open a.txt b.html"), vec!["open", "a.txt", "b.html"]);
        assert_eq!(
            split_args(r#"open "My Links.txt"  other.url"#),
            vec!["open", "My Links.txt", "other.url"]
        );
        assert_eq!(split_args(r#"save """#), vec!["save", ""]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn every_command_is_reachable_by_name() {
        for spec in COMMANDS {
            assert_eq!(lookup(spec.name).unwrap().usage, spec.usage);
        }
        assert_eq!(lookup("LIST").unwrap().name, "list");
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn unknown_command_is_error() {
        let mut s = Session::default();
        match s.execute("frobnicate 1") {
            Err(SessionError::UnknownCommand(name)) => assert_eq!(name, "frobnicate"),
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_lines_do_nothing() {
        let mut s = Session::default();
        assert_eq!(s.execute("").unwrap(), Outcome::Done);
        assert_eq!(s.execute("  # note").unwrap(), Outcome::Done);
    }

    #[test]
    fn usage_errors_carry_usage_line() {
        let mut s = Session::default();
        match s.execute("add") {
            Err(SessionError::Usage(u)) => assert_eq!(u, "add <uri>"),
            other => panic!("expected Usage, got {other:?}"),
        }
        match s.execute("sort maybe") {
            Err(SessionError::Usage(u)) => assert_eq!(u, "sort on|off"),
            other => panic!("expected Usage, got {other:?}"),
        }
        assert!(matches!(s.execute("mode many"), Err(SessionError::Usage(_))));
        assert!(matches!(s.execute("list extra"), Err(SessionError::Usage(_))));
    }

    #[test]
    fn bad_index_is_error() {
        let mut s = Session::default();
        s.execute("add http://a.com").unwrap();
        assert!(matches!(s.execute("remove x"), Err(SessionError::InvalidIndex(_))));
        assert!(matches!(
            s.execute("remove 5"),
            Err(SessionError::IndexOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn list_marks_selection() {
        let mut s = Session::default();
        s.execute("add http://a.com").unwrap();
        s.execute("add http://b.com").unwrap();
        s.execute("select 1").unwrap();
        assert_eq!(
            s.execute("list").unwrap(),
            Outcome::Lines(vec![
                "    0  http://a.com".to_string(),
                "*   1  http://b.com".to_string(),
            ])
        );
    }

    #[test]
    fn help_lists_every_command() {
        let mut s = Session::default();
        match s.execute("help").unwrap() {
            Outcome::Lines(lines) => assert_eq!(lines.len(), COMMANDS.len()),
            other => panic!("expected Lines, got {other:?}"),
        }
    }

    #[test]
    fn quit_and_messages() {
        let mut s = Session::default();
        assert_eq!(s.execute("quit").unwrap(), Outcome::Quit);
        assert_eq!(
            s.execute("add https://a.example").unwrap(),
            Outcome::Message("added at 0".to_string())
        );
        s.execute("select 0").unwrap();
        assert_eq!(
            s.execute("copy").unwrap(),
            Outcome::Message("copied 1 link".to_string())
        );
    }
}
