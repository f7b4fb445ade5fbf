//! geomgen - prints the lathe geometry shader
//!
//! Usage: `geomgen <segments>`. The shader goes to stdout, diagnostics to
//! stderr (set `RUST_LOG=debug` to see the derived constants).

mod cli;

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut out = io::stdout().lock();
    match cli::run(std::env::args_os(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
