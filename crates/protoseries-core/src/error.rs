//! Error types for schema generation

use crate::compiler::CompilerStatus;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema generation
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for schema generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No type declaration could be found in a definition file
    #[error("no type declaration found in {}", path.display())]
    Extraction { path: PathBuf },

    /// The input directory could not be listed
    #[error("failed to list input directory {}: {source}", path.display())]
    ListInputs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema file could not be written
    #[error("failed to write {}: {source}", path.display())]
    WriteSchema {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The schema compiler could not be started
    #[error("schema compiler {program} could not be started: {source}")]
    CompilerUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The schema compiler exited unsuccessfully
    #[error("schema compiler failed on {} ({status})", path.display())]
    CompilerFailed {
        path: PathBuf,
        status: CompilerStatus,
    },
}

impl From<toml::de::Error> for GeneratorError {
    fn from(err: toml::de::Error) -> Self {
        GeneratorError::Config(err.to_string())
    }
}
