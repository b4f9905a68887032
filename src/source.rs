//! Loading source files from disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::lexer::Lexer;

/// The extension appended to file names entered without one.
pub const EXTENSION: &str = "txt";

/// The error type thrown when a [`SourceFile`] cannot be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the given path.
    #[error("file does not exist: {}", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("could not read {}", .path.display())]
    Io {
        /// The unreadable path.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },
}

/// The text of a file, held for as long as its [`Lexer`]s borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Where the text was read from.
    path: PathBuf,
    /// The whole file.
    text: String,
}

impl SourceFile {
    /// Reads the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();

        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::info!(path = %path.display(), bytes = text.len(), "loaded source");
                Ok(Self { path, text })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(SourceError::NotFound { path })
            }
            Err(source) => Err(SourceError::Io { path, source }),
        }
    }

    /// Returns the path `self` was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the lines of `self`, without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Returns a [`Lexer`] over the lines of `self`.
    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(self.lines())
    }
}

/// Turns a file name entered without extension into a path, e.g. `expr` into `expr.txt`.
pub fn resolve(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.{EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn check_open_and_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 + 2\r\n(3)\n").unwrap();

        let source = SourceFile::open(file.path()).unwrap();
        assert_eq!(source.path(), file.path());
        assert_eq!(source.lines().collect::<Vec<_>>(), vec!["1 + 2", "(3)"]);

        let lexemes: Vec<_> = source
            .lexer()
            .map(|token| token.unwrap().lexeme())
            .collect();
        assert_eq!(lexemes, vec!["1", "+", "2", "(", "3", ")", "EOS"]);
    }

    #[test]
    fn missing_files_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = SourceFile::open(&path).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { path: ref missing } if *missing == path));
    }

    #[test]
    fn resolve_appends_the_extension() {
        assert_eq!(resolve("expr"), PathBuf::from("expr.txt"));
        assert_eq!(resolve("dir/expr"), PathBuf::from("dir/expr.txt"));
    }
}
