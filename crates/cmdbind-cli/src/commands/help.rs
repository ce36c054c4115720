use std::io;

use cmdbind_core::command::{Command, CommandMetadata, DeclaredCommand};
use cmdbind_core::error::Error;
use cmdbind_core::options::OptionTable;
use cmdbind_core::registry::{CommandEntry, CommandRegistry};
use itertools::Itertools;

const BINARY_NAME: &str = "cmdbind";

/// Lists commands, or describes the commands named as arguments.
#[derive(Default, Debug)]
pub struct HelpCommand {
    arguments: Vec<String>,
    all: bool,
}

impl Command for HelpCommand {
    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&self, registry: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
        if self.all {
            for entry in sorted_commands(registry) {
                write_command_help(entry, out)?;
                writeln!(out)?;
            }
            return Ok(());
        }

        if self.arguments.is_empty() {
            return write_command_list(registry, out);
        }

        let entries = self
            .arguments
            .iter()
            .map(|name| {
                registry.get_command(name).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        Error::UnknownCommand(name.clone()),
                    )
                })
            })
            .collect::<io::Result<Vec<_>>>()?;

        for entry in entries {
            write_command_help(entry, out)?;
        }

        Ok(())
    }
}

impl DeclaredCommand for HelpCommand {
    fn metadata() -> CommandMetadata {
        CommandMetadata::new("help", "Display help for commands.")
            .with_alt_name("?")
            .with_usage("[command...] [options]")
    }

    fn options() -> OptionTable<Self> {
        OptionTable::<Self>::new().flag("All", "Describe every command in detail", |help, value| {
            help.all = value;
        })
    }
}

fn sorted_commands(registry: &dyn CommandRegistry) -> Vec<&dyn CommandEntry> {
    registry
        .get_commands()
        .into_iter()
        .sorted_by(|a, b| a.metadata().name.cmp(&b.metadata().name))
        .collect()
}

/// Writes the one-line summary of every command, sorted by name.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_command_list(registry: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "usage: {BINARY_NAME} <command> [args] [options]")?;
    writeln!(out)?;
    writeln!(out, "Available commands:")?;

    let commands = sorted_commands(registry);
    let width = commands
        .iter()
        .map(|entry| entry.metadata().name.len())
        .max()
        .unwrap_or_default();

    for entry in commands {
        let metadata = entry.metadata();
        writeln!(out, "  {:<width$}  {}", metadata.name, metadata.description)?;
    }

    Ok(())
}

/// Writes usage, description and options for one command.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_command_help(entry: &dyn CommandEntry, out: &mut dyn io::Write) -> io::Result<()> {
    let metadata = entry.metadata();
    let usage = metadata.usage.as_deref().unwrap_or("[options]");
    writeln!(out, "usage: {BINARY_NAME} {} {usage}", metadata.name)?;

    if let Some(alt_name) = &metadata.alt_name {
        writeln!(out, "alias: {alt_name}")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", metadata.description)?;

    let options = entry.option_descriptors();
    if options.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "options:")?;

    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let width = labels.iter().map(String::len).max().unwrap_or_default();

    for (label, option) in labels.iter().zip(&options) {
        writeln!(out, "  {label:<width$}  {}", option.description)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_registry;
    use cmdbind_core::parser::CommandLineParser;

    fn run(tokens: &[&str]) -> io::Result<String> {
        let registry = build_registry().unwrap();
        let args: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        let command = CommandLineParser::new(&registry)
            .parse_command_line(&args)
            .unwrap()
            .unwrap();

        let mut out = Vec::new();
        command.execute(&registry, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_lists_commands_sorted() {
        let output = run(&["help"]).unwrap();
        assert_eq!(
            output,
            "usage: cmdbind <command> [args] [options]\n\
             \n\
             Available commands:\n\
             \x20 echo   Print the arguments to standard output.\n\
             \x20 help   Display help for commands.\n\
             \x20 props  Print bound properties and sources.\n"
        );
    }

    #[test]
    fn test_describes_one_command() {
        let output = run(&["?", "E"]).unwrap();
        assert!(output.starts_with("usage: cmdbind echo [text...] [options]\nalias: e\n"));
        assert!(output.contains("  -Message (-m) <text>  Text to print instead of the arguments\n"));
        assert!(output.contains("  -Upper"));
    }

    #[test]
    fn test_unknown_command_name() {
        let err = run(&["help", "nope"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Unknown command: 'nope'");
    }

    #[test]
    fn test_unknown_name_writes_nothing() {
        let registry = build_registry().unwrap();
        let command = HelpCommand {
            arguments: vec!["echo".to_string(), "nope".to_string()],
            all: false,
        };

        let mut out = Vec::new();
        let err = command.execute(&registry, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: 'nope'");
        assert!(out.is_empty());
    }

    #[test]
    fn test_all_describes_every_command() {
        let output = run(&["help", "-All"]).unwrap();
        assert_eq!(output.matches("usage: cmdbind ").count(), 3);
    }
}
