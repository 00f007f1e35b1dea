// Error taxonomy for the library.
//
// Every operation is either a pure computation or a single-shot file read,
// so nothing here is retryable. Errors go straight back to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for docdistance operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A document could not be read (missing, unreadable, not UTF-8).
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Similarity scoring over two empty frequency maps.
    #[error("division by zero: empty comparison")]
    EmptyComparison,

    /// Most-frequent-word resolution over two empty frequency maps.
    #[error("no words to rank: both frequency maps are empty")]
    EmptyInput,

    /// Term frequency requested for a document with no tokens.
    #[error("division by zero: document {} has no words", path.display())]
    EmptyDocument { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_path() {
        let err = Error::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read missing.txt: not found");
    }

    #[test]
    fn test_empty_comparison_message() {
        assert_eq!(
            Error::EmptyComparison.to_string(),
            "division by zero: empty comparison"
        );
    }
}
