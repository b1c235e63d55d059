// src/session/error.rs
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Read or write failure, already formatted for display.
    #[error("{0}")]
    IoFailure(String),
    /// `save` on an untitled document; the caller redirects to save-as.
    #[error("document has no file name yet")]
    NeedsPath,
    /// A prompt was dismissed. Never destructive.
    #[error("cancelled")]
    UserCancelled,
    #[error("'{}' is already open in another tab", .0.display())]
    PathInUse(PathBuf),
}

impl SessionError {
    pub fn io(action: &str, path: &Path, err: &io::Error) -> Self {
        SessionError::IoFailure(format!("Error {action} {}: {err}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_path() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let failure = SessionError::io("saving", Path::new("notes.txt"), &err);
        assert_eq!(failure.to_string(), "Error saving notes.txt: Permission denied");
    }
}
