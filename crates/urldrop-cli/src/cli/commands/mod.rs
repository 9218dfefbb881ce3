//! CLI command handlers, one file per command.

mod completions;
mod extract;
mod shell;
mod validate;

pub use completions::{run_completions, run_man};
pub use extract::{run_extract, ExtractArgs};
pub use shell::run_shell;
pub use validate::run_validate;

#[cfg(test)]
pub(crate) use extract::extract_to;
#[cfg(test)]
pub(crate) use shell::shell_loop;
#[cfg(test)]
pub(crate) use validate::report_validity;
