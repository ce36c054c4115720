//! Command-line arguments for the shell itself.
//!
//! Only the shell's own flags are parsed with `clap`. Everything from the
//! command name onward is handed to the core parser untouched.

use clap::Parser;

/// Command-line arguments for the `cmdbind` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdbind_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdbind", "echo", "-Message", "hi"]);
/// assert_eq!(args.command_line, ["echo", "-Message", "hi"]);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0, version, about)]
pub struct Args {
    /// Path to the YAML file with default arguments per command.
    ///
    /// If not provided, defaults to `~/.cmdbind/defaults.yml`.
    #[arg(long = "defaults", short = 'd')]
    pub defaults_path: Option<String>,

    /// The command name followed by its arguments and options.
    ///
    /// Options use a `/` or `-` prefix, e.g. `echo /Message "hi" -Upper`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command_line: Vec<String>,
}
