use std::io;

use cmdbind_core::parser::CommandLineParser;
use cmdbind_core::registry::CommandRegistry;
use log::debug;

use crate::commands::help::write_command_list;
use crate::error::Result;

/// Parses `command_line` against `registry` and runs the resulting command.
///
/// An empty command line prints the list of available commands.
///
/// # Errors
///
/// Returns the parse error verbatim, or an error if the command fails to
/// write its output.
pub fn run_command_line(
    registry: &dyn CommandRegistry,
    command_line: &[String],
    out: &mut dyn io::Write,
) -> Result<()> {
    let parser = CommandLineParser::new(registry);

    match parser.parse_command_line(command_line)? {
        Some(command) => {
            debug!("Executing with arguments: {:?}", command.arguments());
            command.execute(registry, out)?;
        }
        None => write_command_list(registry, out)?,
    }

    Ok(())
}
