use std::io;

use cmdbind_core::command::{Command, CommandMetadata, DeclaredCommand};
use cmdbind_core::options::OptionTable;
use cmdbind_core::registry::CommandRegistry;
use indexmap::IndexMap;
use itertools::Itertools;

/// Shows what `-Property` and `-Source` bound to.
#[derive(Default, Debug)]
pub struct PropsCommand {
    arguments: Vec<String>,
    properties: IndexMap<String, String>,
    sources: Vec<String>,
}

impl Command for PropsCommand {
    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut Vec<String> {
        &mut self.arguments
    }

    fn execute(&self, _: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
        for (key, value) in self.properties.iter().sorted() {
            writeln!(out, "{key}={value}")?;
        }

        for source in &self.sources {
            writeln!(out, "source: {source}")?;
        }

        for argument in &self.arguments {
            writeln!(out, "argument: {argument}")?;
        }

        Ok(())
    }
}

impl DeclaredCommand for PropsCommand {
    fn metadata() -> CommandMetadata {
        CommandMetadata::new("props", "Print bound properties and sources.")
            .with_alt_name("p")
            .with_usage("[arguments...] [options]")
    }

    fn options() -> OptionTable<Self> {
        OptionTable::<Self>::new()
            .properties(
                "Property",
                "Semicolon separated key=value pairs, later keys win",
                |props, key, value| {
                    props.properties.insert(key, value);
                },
            )
            .alt_name("prop")
            .value("Source", "Package source, may be repeated", |props, value: String| {
                props.sources.push(value);
            })
    }
}
