use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error creating directory '{}', a file with the same name exists", path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{template}' references unknown placeholder '{placeholder}' on line {line}")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
        line: usize,
    },

    #[error("invalid placeholder in template '{template}': line {line}, col {column}")]
    InvalidPlaceholder {
        template: String,
        line: usize,
        column: usize,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
