//! Error types for richdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for richdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, converting or rendering documents.
///
/// Unknown or disallowed font ids in a document are not errors; they are
/// replaced by the configured default.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid document JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The editor engine rejected the tree during construction.
    #[error("Schema violation: {0}")]
    Schema(String),

    /// The tree failed opt-in validation.
    #[error("Invalid document: {0}")]
    Invalid(String),

    /// Error during rendering (JSON output).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The font configuration file could not be used.
    #[error("Font configuration error: {0}")]
    Config(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a schema violation error located at a node path.
    pub(crate) fn schema_at(path: &[usize], msg: impl AsRef<str>) -> Self {
        Error::Schema(format!("{} (at {})", msg.as_ref(), format_path(path)))
    }
}

/// Render a child-index path as `/0/2/1`, or `/` for the root.
pub(crate) fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.iter().map(|i| format!("/{}", i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Schema("unknown node type 'link'".into());
        assert_eq!(err.to_string(), "Schema violation: unknown node type 'link'");

        let err = Error::Invalid("2 issues".into());
        assert_eq!(err.to_string(), "Invalid document: 2 issues");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_schema_at_path() {
        let err = Error::schema_at(&[0, 2], "missing attribute 'level'");
        assert_eq!(
            err.to_string(),
            "Schema violation: missing attribute 'level' (at /0/2)"
        );
        assert_eq!(format_path(&[]), "/");
    }
}
