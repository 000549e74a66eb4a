//! Error types for the sample CLI.

use thiserror::Error;

use crate::error::{ConfigError, FakerError};

/// Errors surfaced by the CLI parsing and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// `--kind` named a record kind that does not exist.
    #[error("unknown record kind '{value}'; expected person, company, location, file or card")]
    UnknownKind {
        /// Kind supplied on the command line.
        value: String,
    },
    /// A record could not be rendered as JSON.
    #[error("failed to serialize record: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// The sample configuration could not be loaded or was invalid.
    #[error("config error: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// A generator rejected the configured choices.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generator error.
        #[from]
        #[source]
        source: FakerError,
    },
}
