//! Memo conversion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a note into a memo
#[derive(Debug, Error)]
pub enum MemoError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Front matter serialization error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Title of `{0}` produces an empty slug")]
    EmptySlug(PathBuf),
}

impl MemoError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |err| Self::Io(path, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_memo_error_display() {
        let io_err = MemoError::Io(
            PathBuf::from("notes/2024-01-15-post.md"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("2024-01-15-post.md"));

        let slug_err = MemoError::EmptySlug(PathBuf::from("2024-01-15-???.md"));
        assert!(format!("{slug_err}").contains("empty slug"));
    }

    #[test]
    fn test_memo_error_io_keeps_source() {
        use std::error::Error as _;

        let err = MemoError::io("missing.md")(Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(&err, MemoError::Io(path, e) if path == &PathBuf::from("missing.md") && e.kind() == ErrorKind::NotFound));
        assert!(err.source().is_some());
    }
}
