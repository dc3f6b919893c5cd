// src/domain/repositories/repository.rs

use crate::domain::bookmark::Bookmarks;
use crate::domain::error::DomainResult;
use std::path::Path;

/// Persistence of the complete bookmark set.
///
/// The store is small and always handled as a whole: every mutation reads all
/// bookmarks, changes them in memory and writes all of them back.
pub trait BookmarkRepository: std::fmt::Debug {
    /// Read all bookmarks in stored order
    fn read(&self) -> DomainResult<Bookmarks>;

    /// Replace the stored bookmarks with `bookmarks`
    fn write(&self, bookmarks: &Bookmarks) -> DomainResult<()>;

    /// Location of the backing file
    fn location(&self) -> &Path;
}
