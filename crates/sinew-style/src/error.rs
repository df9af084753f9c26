//! Error types for style composition.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or composing styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style list references an identifier the registry does not define.
    #[error("Unknown style identifier '{identifier}'")]
    UnknownStyleIdentifier { identifier: String },

    /// A style list carries both a left and a right alignment modifier.
    #[error("Conflicting layout modifiers: {}", .identifiers.join(", "))]
    ConflictingLayoutModifiers { identifiers: Vec<String> },

    /// A programmatic registry defined the same identifier twice.
    #[error("Style '{identifier}' is defined more than once")]
    DuplicateStyle { identifier: String },

    /// CSS parsing error.
    ///
    /// The parser recovers from these, so they appear in `warn!` output
    /// rather than as a returned error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid property value, logged when a declaration is skipped.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an unknown identifier error.
    pub fn unknown_identifier(identifier: impl Into<String>) -> Self {
        Self::UnknownStyleIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a conflicting modifiers error.
    pub fn conflicting_modifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ConflictingLayoutModifiers {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a duplicate definition error.
    pub fn duplicate(identifier: impl Into<String>) -> Self {
        Self::DuplicateStyle {
            identifier: identifier.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
