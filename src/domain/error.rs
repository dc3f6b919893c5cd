// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid bookmark name: '{0}'")]
    InvalidName(String),

    #[error("Bookmark '{0}' does not exist")]
    BookmarkNotFound(String),

    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Error changing directory: {0}")]
    ChangeDirectory(String),

    #[error("Error executing shell: {0}")]
    ShellLaunch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    /// Lookup failures are warnings to the user rather than hard errors.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            DomainError::BookmarkNotFound(_) | DomainError::DirectoryNotFound(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_lookup_errors_when_is_lookup_then_true() {
        assert!(DomainError::BookmarkNotFound("x".to_string()).is_lookup());
        assert!(DomainError::DirectoryNotFound(PathBuf::from("/nope")).is_lookup());
        assert!(!DomainError::InvalidName("a b".to_string()).is_lookup());
    }

    #[test]
    fn given_directory_not_found_when_display_then_mentions_path() {
        let err = DomainError::DirectoryNotFound(PathBuf::from("/tmp/gone"));
        assert_eq!(err.to_string(), "Directory '/tmp/gone' does not exist");
    }
}
