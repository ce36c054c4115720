//! Per-command default arguments.
//!
//! The defaults file maps command names to tokens that are inserted right
//! after the command name, before anything the user typed:
//!
//! ```yaml
//! echo: ["-Separator", ", "]
//! props: ["-Source", "https://example.org/feed"]
//! ```
//!
//! Options the user passes explicitly are bound later and therefore win.

use std::fs;
use std::io::ErrorKind;

use cmdbind_core::classify::{classify, Token};
use cmdbind_core::options::ValueKind;
use cmdbind_core::registry::{CommandEntry, CommandRegistry};
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the defaults file
const DEFAULT_DEFAULTS_PATH: &str = "~/.cmdbind/defaults.yml";

/// Resolves the defaults file path.
///
/// Uses the provided path when given, the default path otherwise. Shell
/// expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmdbind_cli::config::get_defaults_path;
///
/// let custom_path = get_defaults_path(&Some("/path/to/defaults.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/defaults.yml");
/// ```
pub fn get_defaults_path(defaults_path_arg: &Option<String>) -> String {
    let defaults_path = match defaults_path_arg {
        Some(defaults_path) => defaults_path,
        None => DEFAULT_DEFAULTS_PATH,
    };

    shellexpand::tilde(defaults_path).to_string()
}

/// Default tokens keyed by command name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Defaults {
    commands: IndexMap<String, Vec<String>>,
}

impl Defaults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Default tokens for the command the registry resolves `name` to.
    ///
    /// Keys may use the command's name or alternate name in any case.
    #[must_use]
    pub fn for_command(&self, registry: &dyn CommandRegistry, name: &str) -> Option<&[String]> {
        let target = registry.get_command(name)?.metadata().name.clone();

        self.commands.iter().find_map(|(key, tokens)| {
            let resolved = registry.get_command(key)?;
            (resolved.metadata().name == target).then_some(tokens.as_slice())
        })
    }

    /// Returns `command_line` with this command's defaults spliced in after
    /// the command name.
    ///
    /// Command lines whose first token names no registered command are
    /// returned unchanged so the parser can report them. A value-taking
    /// option at the end of the defaults is dropped with a warning, since it
    /// would otherwise take the user's first token as its value.
    #[must_use]
    pub fn apply(&self, registry: &dyn CommandRegistry, command_line: &[String]) -> Vec<String> {
        let Some((name, rest)) = command_line.split_first() else {
            return Vec::new();
        };

        let (Some(entry), Some(defaults)) =
            (registry.get_command(name), self.for_command(registry, name))
        else {
            return command_line.to_vec();
        };

        let defaults = without_dangling_option(entry, defaults);

        info!("Applying {} default token(s) to `{name}`", defaults.len());

        let mut applied = Vec::with_capacity(command_line.len() + defaults.len());
        applied.push(name.clone());
        applied.extend_from_slice(defaults);
        applied.extend_from_slice(rest);
        applied
    }
}

fn without_dangling_option<'a>(entry: &dyn CommandEntry, defaults: &'a [String]) -> &'a [String] {
    let options = entry.option_descriptors();
    let mut tokens = defaults.iter().enumerate();

    while let Some((position, token)) = tokens.next() {
        let Token::Option(reference) = classify(token) else {
            continue;
        };

        let name = reference.name.to_lowercase();
        let takes_value = options.iter().any(|option| {
            option.kind != ValueKind::Flag
                && (option.name.to_lowercase() == name
                    || option.alt_name.as_ref().is_some_and(|alt| alt.to_lowercase() == name))
        });

        if takes_value && tokens.next().is_none() {
            warn!(
                "Default option `{token}` for `{}` has no value, ignoring it",
                entry.metadata().name
            );
            return &defaults[..position];
        }
    }

    defaults
}

/// Loads the defaults file.
///
/// A missing or empty file yields empty defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a valid
/// map of command names to token lists.
pub fn load_defaults(path: &str) -> Result<Defaults> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No defaults file at `{path}`");
            return Ok(Defaults::default());
        }
        Err(e) => {
            return Err(Error::io_error(
                "defaults".to_string(),
                path.to_string(),
                e,
            ))
        }
    };

    if contents.trim().is_empty() {
        warn!("Defaults file at `{path}` is empty");
        return Ok(Defaults::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "defaults".to_string(),
            path.to_string(),
            e,
        )
    })
}
