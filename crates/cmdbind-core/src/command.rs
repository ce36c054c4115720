use std::fmt::{Display, Formatter};
use std::io;

use crate::options::OptionTable;
use crate::registry::CommandRegistry;

/// A parsed, ready-to-run command.
///
/// Instances are created fresh for every parse and filled in by the parser:
/// positional arguments through [`arguments_mut`](Command::arguments_mut),
/// options through the command's [`OptionTable`].
pub trait Command {
    /// Positional arguments, in the order they appeared.
    fn arguments(&self) -> &[String];

    fn arguments_mut(&mut self) -> &mut Vec<String>;

    /// Runs the command, writing any output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn execute(&self, registry: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()>;
}

/// A command type that can be registered by name.
///
/// The option table is built once per registration, not once per parse.
pub trait DeclaredCommand: Command + Default + 'static {
    fn metadata() -> CommandMetadata;

    fn options() -> OptionTable<Self>;
}

/// Name and help text for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: String,
    pub alt_name: Option<String>,
    pub description: String,
    pub usage: Option<String>,
}

impl CommandMetadata {
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            alt_name: None,
            description: description.to_string(),
            usage: None,
        }
    }

    #[must_use]
    pub fn with_alt_name(mut self, alt_name: &str) -> Self {
        self.alt_name = Some(alt_name.to_string());
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = Some(usage.to_string());
        self
    }
}

impl Display for CommandMetadata {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            formatter.write_str(&self.name)
        } else {
            write!(formatter, "{} ({})", self.name, self.description)
        }
    }
}
