use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the sticker-catalog library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// No directory path was supplied.
    #[error("pass the path argument to the call")]
    MissingArgument,

    /// The directory does not exist, is not a directory, or cannot be listed.
    #[error("failed to get directory content of '{path}': {message}")]
    DirectoryRead {
        /// Directory that was requested
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Entry name does not split into the expected number of tokens.
    #[error("'{filename}' has {tokens} tokens, expected {}", crate::parser::TOKEN_COUNT)]
    MalformedEntryName {
        /// Logical filename (asset suffix removed)
        filename: String,
        /// Number of tokens found
        tokens: usize,
    },

    /// One of the numeric tokens is not a base-10 integer.
    #[error("failed to get data for sticker {filename}: {field} is not an integer ('{value}')")]
    UnparsableNumericField {
        /// Logical filename (asset suffix removed)
        filename: String,
        /// Name of the field that failed
        field: &'static str,
        /// Offending token
        value: String,
    },

    /// Configuration validation error.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },

    /// Writing generated output failed.
    #[error("Failed to write output: {message}")]
    Output {
        /// Error message
        message: String,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a directory read error with path context.
    #[must_use]
    pub fn directory_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed entry name error.
    #[must_use]
    pub fn malformed(filename: impl Into<String>, tokens: usize) -> Self {
        Self::MalformedEntryName {
            filename: filename.into(),
            tokens,
        }
    }

    /// Creates an unparsable numeric field error.
    #[must_use]
    pub fn unparsable(
        filename: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnparsableNumericField {
            filename: filename.into(),
            field,
            value: value.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an output error from a failed write.
    #[must_use]
    pub fn output(source: &std::io::Error) -> Self {
        Self::Output {
            message: source.to_string(),
        }
    }

    /// Returns true if the error is about the directory argument itself.
    ///
    /// These end the run with a printed message instead of a failure status.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::MissingArgument | Self::DirectoryRead { .. })
    }

    /// Returns true if the error only disqualifies a single entry.
    #[must_use]
    pub const fn is_entry_skip(&self) -> bool {
        matches!(
            self,
            Self::MalformedEntryName { .. } | Self::UnparsableNumericField { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
