use urldrop_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    logging::init_logging();

    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("urldrop error: {:#}", err);
        std::process::exit(1);
    }
}
