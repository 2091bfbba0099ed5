//! Error types for graphdot operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for graphdot operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Comprehensive error type for all export operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A data record's textual conversion failed while building a label
    #[error("Label conversion failed for {entity}")]
    Conversion {
        /// Entity whose label was being built (e.g. `node "a"`)
        entity: String,
        /// Formatting error reported by the record
        #[source]
        source: std::fmt::Error,
    },

    /// Writing exported text to a file or sink failed
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Invoking the Graphviz `dot` binary failed
    #[error("Render error: {message}")]
    Render {
        /// Description of what went wrong
        message: String,
        /// Optional source error from spawning the process
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ExportError {
    /// Create a conversion error for the given entity.
    pub fn conversion(entity: impl Into<String>, source: std::fmt::Error) -> Self {
        Self::Conversion {
            entity: entity.into(),
            source,
        }
    }

    /// Create an I/O error from a message and source.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error from a message and source.
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a render error from a message and optional source.
    pub fn render(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::Render {
            message: message.into(),
            source,
        }
    }
}
