//! cmdbind Core Library
//!
//! This crate turns a raw list of command-line arguments into a populated,
//! strongly-typed command object. It resolves the command by name, splits
//! the remaining tokens into positional arguments and options, converts
//! option values into their declared types, and reports malformed input with
//! exact, user-facing messages.
//!
//! # Key Features
//!
//! - **Tokenizer**: Forward-only cursor over the argument list
//! - **Option Classification**: `/Name` and `-Name` options, `-Flag-` for explicit false
//! - **Typed Binding**: Option tables built once per command type, no reflection
//! - **Command Registry**: Case-insensitive lookup by name or alternate name
//! - **Error Handling**: One error type with the messages shown to end users
//!
//! # Examples
//!
//! ```rust
//! use std::io;
//! use cmdbind_core::command::{Command, CommandMetadata, DeclaredCommand};
//! use cmdbind_core::options::OptionTable;
//! use cmdbind_core::parser::CommandLineParser;
//! use cmdbind_core::registry::{CommandManager, CommandRegistry};
//!
//! #[derive(Default)]
//! struct Push {
//!     arguments: Vec<String>,
//!     timeout: u32,
//! }
//!
//! impl Command for Push {
//!     fn arguments(&self) -> &[String] {
//!         &self.arguments
//!     }
//!
//!     fn arguments_mut(&mut self) -> &mut Vec<String> {
//!         &mut self.arguments
//!     }
//!
//!     fn execute(&self, _: &dyn CommandRegistry, out: &mut dyn io::Write) -> io::Result<()> {
//!         writeln!(out, "pushing {:?} with timeout {}", self.arguments, self.timeout)
//!     }
//! }
//!
//! impl DeclaredCommand for Push {
//!     fn metadata() -> CommandMetadata {
//!         CommandMetadata::new("push", "Push a package")
//!     }
//!
//!     fn options() -> OptionTable<Self> {
//!         OptionTable::<Self>::new().value("Timeout", "Seconds to wait", |push, value: u32| {
//!             push.timeout = value;
//!         })
//!     }
//! }
//!
//! let mut manager = CommandManager::new();
//! manager.register::<Push>()?;
//!
//! let args: Vec<String> = ["push", "pkg.nupkg", "/timeout", "30"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! let command = CommandLineParser::new(&manager).parse_command_line(&args)?;
//! assert_eq!(command.unwrap().arguments(), ["pkg.nupkg"]);
//! # Ok::<(), cmdbind_core::error::Error>(())
//! ```

pub mod binder;
pub mod classify;
pub mod command;
pub mod error;
pub mod options;
pub mod parser;
pub mod registry;
pub mod tokenizer;
