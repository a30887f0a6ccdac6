//! Error types for session operations

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Filesystem operation that failed, used to render error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Scan,
    Read,
    Write,
    Create,
    Inspect,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            IoOp::Scan => "load directory",
            IoOp::Read => "read file",
            IoOp::Write => "save file",
            IoOp::Create => "create file",
            IoOp::Inspect => "open",
        };
        f.write_str(verb)
    }
}

/// Errors surfaced by the scanner, the store and the session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to {op} {}: {source}", .path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No file is open: please open or create a file first")]
    NoActiveDocument,

    #[error("No directory is open: please open a directory first")]
    NoActiveDirectory,

    #[error("File name must not be empty")]
    EmptyName,

    #[error("Invalid file name {0:?}: use a plain name without directories")]
    InvalidName(String),

    #[error("No file switch is waiting for confirmation")]
    NoPendingSwitch,
}

impl SessionError {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure, if any
    #[cfg(test)]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
