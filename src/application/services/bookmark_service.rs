// src/application/services/bookmark_service.rs
use crate::domain::bookmark::{is_valid_name, Bookmark, Bookmarks};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::shell::ShellLauncher;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bookmark operations on top of a repository.
///
/// Mutations follow read-all, change in memory, write-all. There is no locking:
/// two processes mutating concurrently lose one of the updates.
#[derive(Debug)]
pub struct BookmarkService<R: BookmarkRepository> {
    repository: R,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Stores `dir` under `name`, replacing an existing bookmark of that name.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&self, name: &str, dir: &Path) -> DomainResult<Bookmark> {
        let bookmark = Bookmark::new(name, dir)?;
        let mut bookmarks = self.repository.read()?;
        if let Some(previous) = bookmarks.insert(bookmark.clone()) {
            debug!("Replacing bookmark: {}", previous);
        }
        self.repository.write(&bookmarks)?;
        Ok(bookmark)
    }

    /// Removes `name`; returns whether it existed. The store is rewritten either way.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&self, name: &str) -> DomainResult<bool> {
        if !is_valid_name(name) {
            return Err(DomainError::InvalidName(name.to_string()));
        }
        let mut bookmarks = self.repository.read()?;
        let removed = bookmarks.remove(name);
        self.repository.write(&bookmarks)?;
        Ok(removed.is_some())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, name: &str) -> DomainResult<Option<Bookmark>> {
        Ok(self.repository.read()?.get(name).cloned())
    }

    pub fn list(&self) -> DomainResult<Bookmarks> {
        self.repository.read()
    }

    /// Resolves `name` to a directory that still exists.
    pub fn resolve_dir(&self, name: &str) -> DomainResult<PathBuf> {
        let bookmark = self
            .get(name)?
            .ok_or_else(|| DomainError::BookmarkNotFound(name.to_string()))?;
        if !bookmark.path.is_dir() {
            return Err(DomainError::DirectoryNotFound(bookmark.path));
        }
        Ok(bookmark.path)
    }

    /// Jumps into the directory of `name` via `launcher`. Nothing is launched when the
    /// bookmark or its directory is missing.
    #[instrument(level = "debug", skip(self, launcher))]
    pub fn go(&self, name: &str, launcher: &dyn ShellLauncher) -> DomainResult<()> {
        let dir = self.resolve_dir(name)?;
        debug!("Launching shell in {:?}", dir);
        launcher.launch(&dir)
    }
}
