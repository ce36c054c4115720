//! cmdbind CLI Library
//!
//! This crate provides the `cmdbind` shell around the core parser. It parses
//! its own flags, splices per-command defaults into the command line, hands
//! the result to the core parser, and runs the command it gets back.
//!
//! # Architecture
//!
//! - [`cli_args`]: The shell's own flags, parsed with `clap`
//! - [`config`]: Loading and applying the per-command defaults file
//! - [`commands`]: The built-in commands and their option tables
//! - [`execution`]: Parse-then-run for a single command line
//!
//! # Examples
//!
//! ```bash
//! # List commands
//! cmdbind
//!
//! # Options use a `/` or `-` prefix and are matched ignoring case
//! cmdbind echo hello world -separator ", " /Upper
//!
//! # A trailing `-` turns a flag off again
//! cmdbind echo quiet -Upper-
//!
//! # Key/value properties and repeatable options
//! cmdbind props -Property "Configuration=Release;Platform=x64" -Source a -Source b
//!
//! # Describe a command
//! cmdbind help echo
//! ```

pub mod cli_args;
pub mod commands;
pub mod config;
pub mod error;
pub mod execution;
