//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use newsrank_cli::CliError;

fn main() {
    match newsrank_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("newsrank: {err}");
            std::process::exit(1);
        }
    }
}
