//! Turns a raw argument list into a populated command.

use log::{debug, trace};

use crate::binder::bind_option;
use crate::classify::{classify, Token};
use crate::command::Command;
use crate::error::{Error, Result};
use crate::options::OptionTable;
use crate::registry::CommandRegistry;
use crate::tokenizer::{next_command_line_item, ArgCursor};

/// Resolves commands by name and fills them in from the rest of the line.
pub struct CommandLineParser<'r> {
    registry: &'r dyn CommandRegistry,
}

impl<'r> CommandLineParser<'r> {
    #[must_use]
    pub fn new(registry: &'r dyn CommandRegistry) -> Self {
        Self { registry }
    }

    /// Parses a full command line: command name first, then its arguments
    /// and options.
    ///
    /// Returns `Ok(None)` for an empty command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] if the first token names no
    /// registered command, or any error from option binding.
    pub fn parse_command_line(&self, args: &[String]) -> Result<Option<Box<dyn Command>>> {
        let mut cursor = ArgCursor::new(args);

        let Some(name) = next_command_line_item(Some(&mut cursor)) else {
            return Ok(None);
        };

        let entry = self
            .registry
            .get_command(&name)
            .ok_or(Error::UnknownCommand(name))?;

        debug!("Resolved command `{}`", entry.metadata().name);

        entry.create(&mut cursor).map(Some)
    }
}

/// Consumes every remaining token, binding options and collecting
/// positional arguments onto `command`.
///
/// An exhausted cursor returns `command` unchanged.
///
/// # Errors
///
/// Returns the first binding error; `command` is dropped in that case.
pub fn extract_options<C: Command>(
    mut command: C,
    options: &OptionTable<C>,
    cursor: &mut ArgCursor<'_>,
) -> Result<C> {
    while let Some(token) = cursor.advance() {
        match classify(token) {
            Token::Argument(argument) => {
                trace!("Positional argument `{argument}`");
                command.arguments_mut().push(argument.to_string());
            }
            Token::Option(reference) => {
                trace!("Option reference `{}`", reference.token);
                bind_option(&mut command, options, reference, cursor)?;
            }
        }
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct Recorder {
        arguments: Vec<String>,
        quiet: bool,
    }

    impl Command for Recorder {
        fn arguments(&self) -> &[String] {
            &self.arguments
        }

        fn arguments_mut(&mut self) -> &mut Vec<String> {
            &mut self.arguments
        }

        fn execute(&self, _: &dyn CommandRegistry, _: &mut dyn io::Write) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(tokens: &[&str]) -> Result<Recorder> {
        let args: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        let options = OptionTable::<Recorder>::new().flag("Quiet", "", |recorder, value| {
            recorder.quiet = value;
        });
        extract_options(Recorder::default(), &options, &mut ArgCursor::new(&args))
    }

    #[test]
    fn test_arguments_and_options_interleave() {
        let recorder = run(&["a", "-Quiet", "b", "a"]).unwrap();
        assert_eq!(recorder.arguments(), ["a", "b", "a"]);
        assert!(recorder.quiet);
    }

    #[test]
    fn test_later_occurrence_wins() {
        let recorder = run(&["-Quiet", "/quiet-"]).unwrap();
        assert!(!recorder.quiet);
    }

    #[test]
    fn test_error_stops_extraction() {
        let err = run(&["a", "-Loud", "b"]).err().unwrap();
        assert_eq!(err, Error::UnknownOption("-Loud".to_string()));
    }
}
