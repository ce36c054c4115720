//! Commands available from the `cmdbind` binary.
//!
//! - [`echo`]: print text built from arguments and options
//! - [`props`]: print bound properties and sources
//! - [`help`]: list commands or describe one

pub mod echo;
pub mod help;
pub mod props;

use cmdbind_core::error::Result;
use cmdbind_core::registry::CommandManager;

pub use echo::EchoCommand;
pub use help::HelpCommand;
pub use props::PropsCommand;

/// Builds the registry with every built-in command.
///
/// # Errors
///
/// Returns an error if two commands or options share a name.
pub fn build_registry() -> Result<CommandManager> {
    let mut manager = CommandManager::new();
    manager.register::<EchoCommand>()?;
    manager.register::<PropsCommand>()?;
    manager.register::<HelpCommand>()?;
    Ok(manager)
}
