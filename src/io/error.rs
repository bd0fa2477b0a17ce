use super::Format;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O operation failed{}: {source}", describe(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data{}: {details} (at line {line})", describe(.path.as_deref()))]
    Parse {
        format: Format,
        path: Option<PathBuf>,
        line: usize,
        details: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            path: None,
            line,
            details: details.into(),
        }
    }

    /// Classifies a failure to open `path`. Missing and unreadable paths
    /// become [`Error::NotFound`]; anything else stays an I/O error.
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Self::NotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Io {
                path: Some(path.to_path_buf()),
                source,
            },
        }
    }

    /// Attaches `path` to errors that were raised without one.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(path.to_path_buf()),
                source,
            },
            Self::Parse {
                format,
                path: None,
                line,
                details,
            } => Self::Parse {
                format,
                path: Some(path.to_path_buf()),
                line,
                details,
            },
            other => other,
        }
    }

    #[inline]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!(" in '{}'", p.display()),
        None => String::new(),
    }
}
