//! Entry point for the `touring` command-line interface.
#![forbid(unsafe_code)]

use touring_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match touring_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("touring: {err}");
            std::process::exit(1);
        }
    }
}
