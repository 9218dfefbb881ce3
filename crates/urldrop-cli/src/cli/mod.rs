//! CLI for Urldrop.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urldrop_core::config;

use commands::{run_completions, run_extract, run_man, run_shell, run_validate, ExtractArgs};

/// Top-level CLI for Urldrop.
#[derive(Debug, Parser)]
#[command(name = "urldrop")]
#[command(about = "Urldrop: extract links from text, HTML and .url files", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urldrop/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract links from .txt, .htm/.html and .url files and print them one per line.
    Extract {
        /// Input files; unsupported extensions are skipped.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also save the list to this file (overwritten).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sort the list before printing/saving.
        #[arg(long)]
        sort: bool,

        /// Print the list as a JSON array.
        #[arg(long)]
        json: bool,

        /// Keep every valid HTML link, not only those containing the letter 'a'.
        #[arg(long)]
        all_html_links: bool,

        /// Validate the URL= target of .url files.
        #[arg(long)]
        validate_shortcuts: bool,
    },

    /// Check whether each candidate is an absolute URI with an accepted scheme.
    Validate {
        /// Strings to check.
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Interactive list session (type `help` for commands).
    Shell {
        /// Files to open before the first prompt.
        files: Vec<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract {
                files,
                output,
                sort,
                json,
                all_html_links,
                validate_shortcuts,
            } => {
                let mut options = cfg.extract_options();
                if all_html_links {
                    options.html_require_letter_a = false;
                }
                if validate_shortcuts {
                    options.validate_shortcuts = true;
                }
                run_extract(&ExtractArgs {
                    files: &files,
                    output: output.as_deref(),
                    sort: sort || cfg.sorted,
                    json,
                    options,
                })?;
            }
            CliCommand::Validate { candidates } => run_validate(&candidates)?,
            CliCommand::Shell { files } => run_shell(&cfg, &files)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
