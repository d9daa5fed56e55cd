use imgopt_core::logging;

mod cli;

use crate::cli::{run_exit_code, Cli};

fn main() {
    // Log to the state dir; fall back to stderr rather than refusing to run.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    let cli = match Cli::parse_or_exit_code() {
        Ok(cli) => cli,
        Err(code) => std::process::exit(code),
    };

    let result = cli.run();
    if let Err(err) = &result {
        tracing::error!("run failed: {:#}", err);
        eprintln!("optimize error: {:#}", err);
    }
    std::process::exit(run_exit_code(&result));
}
