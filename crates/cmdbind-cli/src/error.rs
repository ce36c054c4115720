use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    CommandLine(#[from] cmdbind_core::error::Error),

    #[error("{}", .0)]
    Output(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
