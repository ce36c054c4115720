use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing a command line or registering commands.
///
/// The parse variants render exactly the text shown to end users, so their
/// messages must not change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown command: '{}'", .0)]
    UnknownCommand(String),

    #[error("Unknown option: '{}'", .0)]
    UnknownOption(String),

    #[error("Missing option value for: '{}'", .0)]
    MissingOptionValue(String),

    #[error("Invalid option value: '{} {}'", .option, .value)]
    InvalidOptionValue { option: String, value: String },

    #[error("Duplicate command name: '{}'", .0)]
    DuplicateCommand(String),

    #[error("Duplicate option name: '{}'", .0)]
    DuplicateOption(String),

    #[error("Command and option names may not be empty")]
    EmptyName,
}

impl Error {
    pub fn invalid_option_value(option: &str, value: &str) -> Self {
        Self::InvalidOptionValue {
            option: option.to_string(),
            value: value.to_string(),
        }
    }
}
