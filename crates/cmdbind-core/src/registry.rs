//! Command lookup by name.
//!
//! The parser only talks to [`CommandRegistry`]; [`CommandManager`] is the
//! in-memory implementation used by the shell.

use indexmap::IndexMap;
use log::debug;

use crate::command::{Command, CommandMetadata, DeclaredCommand};
use crate::error::{Error, Result};
use crate::options::{OptionInfo, OptionTable};
use crate::parser::extract_options;
use crate::tokenizer::ArgCursor;

/// One registered command type.
pub trait CommandEntry {
    fn metadata(&self) -> &CommandMetadata;

    /// Declared options, in declaration order.
    fn option_descriptors(&self) -> Vec<OptionInfo>;

    /// Builds a fresh command and fills it from the remaining tokens.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding options.
    fn create(&self, cursor: &mut ArgCursor<'_>) -> Result<Box<dyn Command>>;
}

/// Source of commands for the parser.
pub trait CommandRegistry {
    /// Finds a command by name or alternate name, ignoring case.
    fn get_command(&self, name: &str) -> Option<&dyn CommandEntry>;

    /// All commands, in registration order.
    fn get_commands(&self) -> Vec<&dyn CommandEntry>;
}

struct Registration<C> {
    metadata: CommandMetadata,
    options: OptionTable<C>,
}

impl<C: DeclaredCommand> CommandEntry for Registration<C> {
    fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    fn option_descriptors(&self) -> Vec<OptionInfo> {
        self.options.infos()
    }

    fn create(&self, cursor: &mut ArgCursor<'_>) -> Result<Box<dyn Command>> {
        let command = extract_options(C::default(), &self.options, cursor)?;
        Ok(Box::new(command))
    }
}

/// Registered commands, keyed case-insensitively by name and alternate name.
#[derive(Default)]
pub struct CommandManager {
    commands: Vec<Box<dyn CommandEntry>>,
    lookup: IndexMap<String, usize>,
}

impl CommandManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers command type `C`, building its option table once.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty, if the command's name or
    /// alternate name is already taken, or if its option table declares the
    /// same name twice. Nothing is registered on error.
    pub fn register<C: DeclaredCommand>(&mut self) -> Result<()> {
        let metadata = C::metadata();
        let options = C::options();
        options.validate()?;

        let names: Vec<&str> = std::iter::once(metadata.name.as_str())
            .chain(metadata.alt_name.as_deref())
            .collect();

        for (position, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(Error::EmptyName);
            }
            let taken_earlier = names[..position]
                .iter()
                .any(|earlier| earlier.to_lowercase() == name.to_lowercase());
            if taken_earlier || self.lookup.contains_key(&name.to_lowercase()) {
                return Err(Error::DuplicateCommand((*name).to_string()));
            }
        }

        let index = self.commands.len();
        for name in names {
            self.lookup.insert(name.to_lowercase(), index);
        }

        debug!(
            "Registered command `{}` with {} option(s)",
            metadata.name,
            options.len()
        );

        self.commands.push(Box::new(Registration { metadata, options }));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandRegistry for CommandManager {
    fn get_command(&self, name: &str) -> Option<&dyn CommandEntry> {
        self.lookup
            .get(&name.to_lowercase())
            .map(|&index| self.commands[index].as_ref())
    }

    fn get_commands(&self) -> Vec<&dyn CommandEntry> {
        self.commands.iter().map(AsRef::as_ref).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Default)]
    struct Restore {
        arguments: Vec<String>,
        no_cache: bool,
    }

    impl Command for Restore {
        fn arguments(&self) -> &[String] {
            &self.arguments
        }

        fn arguments_mut(&mut self) -> &mut Vec<String> {
            &mut self.arguments
        }

        fn execute(&self, _: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
            writeln!(out, "restore no_cache={}", self.no_cache)
        }
    }

    impl DeclaredCommand for Restore {
        fn metadata() -> CommandMetadata {
            CommandMetadata::new("restore", "Restore packages").with_alt_name("r")
        }

        fn options() -> OptionTable<Self> {
            OptionTable::<Self>::new().flag("NoCache", "Skip the cache", |restore, value| {
                restore.no_cache = value;
            })
        }
    }

    #[derive(Default)]
    struct Clash {
        arguments: Vec<String>,
    }

    impl Command for Clash {
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

    impl DeclaredCommand for Clash {
        fn metadata() -> CommandMetadata {
            CommandMetadata::new("R", "Clashes with restore's alternate name")
        }

        fn options() -> OptionTable<Self> {
            OptionTable::<Self>::new()
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut manager = CommandManager::new();
        manager.register::<Restore>().unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get_command("RESTORE").unwrap().metadata().name, "restore");
        assert_eq!(manager.get_command("r").unwrap().metadata().name, "restore");
        assert!(manager.get_command("install").is_none());
    }

    #[test]
    fn test_option_descriptors() {
        let mut manager = CommandManager::new();
        manager.register::<Restore>().unwrap();

        let descriptors = manager.get_command("restore").unwrap().option_descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "NoCache");
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut manager = CommandManager::new();
        manager.register::<Restore>().unwrap();

        assert_eq!(
            manager.register::<Restore>(),
            Err(Error::DuplicateCommand("restore".to_string()))
        );
        assert_eq!(
            manager.register::<Clash>(),
            Err(Error::DuplicateCommand("R".to_string()))
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_create_fills_a_fresh_command() {
        let mut manager = CommandManager::new();
        manager.register::<Restore>().unwrap();
        let entry = manager.get_command("restore").unwrap();

        let args = vec!["-NoCache".to_string(), "packages.config".to_string()];
        let first = entry.create(&mut ArgCursor::new(&args)).unwrap();
        assert_eq!(first.arguments(), ["packages.config"]);

        let second = entry.create(&mut ArgCursor::new(&[])).unwrap();
        assert!(second.arguments().is_empty());

        let mut out = Vec::new();
        second.execute(&manager, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "restore no_cache=false\n");
    }
}
