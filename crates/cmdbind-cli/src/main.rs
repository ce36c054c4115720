use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use cmdbind_cli::cli_args::Args;
use cmdbind_cli::error::Result;
use cmdbind_cli::{commands, config, execution};
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();
    let registry = commands::build_registry()?;

    let defaults_path = config::get_defaults_path(&args.defaults_path);
    debug!("Defaults path: `{}`", defaults_path);

    let defaults = config::load_defaults(&defaults_path)?;
    let command_line = defaults.apply(&registry, &args.command_line);

    let mut stdout = stdout().lock();
    execution::run_command_line(&registry, &command_line, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
