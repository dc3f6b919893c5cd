// src/cli/error.rs
use crate::domain::error::DomainError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing bookmark name")]
    MissingName,

    #[error("Invalid usage: {0}")]
    InvalidUsage(String),

    #[error("Invalid usage of the completion option.")]
    CompletionUsage,

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Prefixes the message, e.g. `Error reading bookmarks: <cause>`.
    ///
    /// Lookup and validation errors are left untouched, their message is complete.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        if self.is_self_describing() {
            return self;
        }
        match self {
            CliError::Other(msg) => CliError::Other(format!("{}: {}", context.into(), msg)),
            err => CliError::Other(format!("{}: {}", context.into(), err)),
        }
    }

    fn is_self_describing(&self) -> bool {
        matches!(
            self,
            CliError::MissingName
                | CliError::Domain(
                    DomainError::InvalidName(_)
                        | DomainError::BookmarkNotFound(_)
                        | DomainError::DirectoryNotFound(_)
                        | DomainError::ChangeDirectory(_)
                        | DomainError::ShellLaunch(_)
                )
        )
    }

    /// Whether the message is shown as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, CliError::Domain(err) if err.is_lookup())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_context_then_prefixed() {
        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(
            err.context("Error reading bookmarks").to_string(),
            "Error reading bookmarks: gone"
        );
    }

    #[test]
    fn given_lookup_error_when_context_then_unchanged_and_warning() {
        let err = CliError::from(DomainError::BookmarkNotFound("x".to_string()))
            .context("Error reading bookmarks");
        assert_eq!(err.to_string(), "Bookmark 'x' does not exist");
        assert!(err.is_warning());
    }

    #[test]
    fn given_missing_name_when_display_then_message() {
        assert_eq!(CliError::MissingName.to_string(), "Missing bookmark name");
        assert!(!CliError::MissingName.is_warning());
    }
}
