use std::io;

use cmdbind_core::command::{Command, CommandMetadata, DeclaredCommand};
use cmdbind_core::options::OptionTable;
use cmdbind_core::registry::CommandRegistry;

const DEFAULT_SEPARATOR: &str = " ";

/// Prints its arguments, or `-Message`, joined by `-Separator`.
#[derive(Default, Debug)]
pub struct EchoCommand {
    arguments: Vec<String>,
    message: Option<String>,
    separator: Option<String>,
    repeat: Option<u32>,
    upper: bool,
}

impl EchoCommand {
    fn text(&self) -> String {
        let text = match &self.message {
            Some(message) => message.clone(),
            None => self
                .arguments
                .join(self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)),
        };

        if self.upper {
            text.to_uppercase()
        } else {
            text
        }
    }
}

impl Command for EchoCommand {
    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&self, _: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
        let text = self.text();
        for _ in 0..self.repeat.unwrap_or(1) {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

impl DeclaredCommand for EchoCommand {
    fn metadata() -> CommandMetadata {
        CommandMetadata::new("echo", "Print the arguments to standard output.")
            .with_alt_name("e")
            .with_usage("[text...] [options]")
    }

    fn options() -> OptionTable<Self> {
        OptionTable::<Self>::new()
            .value("Message", "Text to print instead of the arguments", |echo, value: String| {
                echo.message = Some(value);
            })
            .alt_name("m")
            .value("Separator", "Placed between arguments (default: space)", |echo, value: String| {
                echo.separator = Some(value);
            })
            .value("Repeat", "Number of times to print the text", |echo, value: u32| {
                echo.repeat = Some(value);
            })
            .flag("Upper", "Convert the text to upper case", |echo, value| echo.upper = value)
    }
}
